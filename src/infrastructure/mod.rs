pub mod sale_table;
