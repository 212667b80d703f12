mod price_bar;
mod stock_row;
mod trend;

pub use price_bar::PriceBar;
pub use stock_row::StockRow;
pub use trend::Trend;

/// Derived time series for one uploaded file, sorted ascending by date
pub type StockSeries = Vec<StockRow>;
