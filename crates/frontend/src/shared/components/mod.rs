pub mod table;
pub mod virtual_list;
