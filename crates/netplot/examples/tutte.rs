//! Render the default Tutte graph in the browser.
//!
//! ```sh
//! cargo run --example tutte
//! ```

use netplot::GraphPlot;

fn main() -> netplot::Result<()> {
    tracing_subscriber::fmt::init();

    GraphPlot::new().show()
}
