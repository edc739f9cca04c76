pub mod programmes;
