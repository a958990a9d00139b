pub mod bangumi;
