// Infrastructure layer: adapters, file I/O, serde, eventing
pub mod city_tiers;
pub mod csv_adapter;
pub mod event_ndjson;
pub mod json_adapter;
