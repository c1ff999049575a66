pub mod quicksell;
