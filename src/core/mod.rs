pub mod attributes;
pub mod dataset;
pub mod instance_header;
pub mod instances;
