pub mod cep;
pub mod weather;
