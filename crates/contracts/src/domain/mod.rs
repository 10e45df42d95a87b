pub mod a001_menu_item;
