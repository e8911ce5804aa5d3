pub mod parse_menu;
