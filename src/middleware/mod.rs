pub mod validated;
