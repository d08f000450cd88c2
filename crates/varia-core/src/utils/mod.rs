pub mod to_json;
