pub mod errors;
pub mod db;
pub mod marketing_status;

#[cfg(test)]
mod tests;
