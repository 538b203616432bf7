pub mod number_format;
pub mod table_cell_money;

pub use number_format::format_money;
pub use table_cell_money::TableCellMoney;
