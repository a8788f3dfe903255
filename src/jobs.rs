pub mod lunch;
