pub mod generated_name;
