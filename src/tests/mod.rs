mod unit_domain_models;
mod unit_json_payload;
