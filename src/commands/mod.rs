pub mod add_to_path;
pub mod new;
