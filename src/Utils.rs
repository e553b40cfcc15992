/// parsing of numbers typed by a user (decimal comma or point, spaces ignored)
pub mod number_input;
