//! Charts module - static log-log chart rendering

mod renderer;

pub use renderer::{
    PlotError, RenderedCharts, StaticChartRenderer, MODULI_SUFFIX, VISCOSITY_RANGE,
    VISCOSITY_SUFFIX,
};
