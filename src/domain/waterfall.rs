use serde::Serialize;

/// Fixed palette for waterfall bars.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BarColor {
    NeutralDark,
    NeutralGray,
    Amber,
    Yellow,
    Green,
}

impl BarColor {
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            BarColor::NeutralDark => (0x3A, 0x3A, 0x3A),
            BarColor::NeutralGray => (0x6B, 0x72, 0x80),
            BarColor::Amber => (0xD9, 0x77, 0x06),
            BarColor::Yellow => (0xEA, 0xB3, 0x08),
            BarColor::Green => (0x22, 0xC5, 0x5E),
        }
    }

    pub fn hex(&self) -> String {
        let (r, g, b) = self.rgb();
        format!("#{r:02X}{g:02X}{b:02X}")
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct WaterfallBar {
    pub label: String,
    pub signed_value: f64,
    pub baseline: f64,
    pub color: BarColor,
}

impl WaterfallBar {
    /// The end of the bar opposite its baseline.
    pub fn top(&self) -> f64 {
        self.baseline + self.signed_value
    }
}

/// Ordered bars of a waterfall chart.
///
/// All bars except the last are chained: each one starts where the previous
/// ones left off. The last bar is the net result and always starts at zero.
/// The number of bars depends on the inputs, so readers must use [`len`](Self::len).
#[derive(Serialize, Debug, Clone, PartialEq, Default)]
pub struct WaterfallSeries {
    pub bars: Vec<WaterfallBar>,
}

impl WaterfallSeries {
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Bars before the final net result.
    pub fn chained(&self) -> &[WaterfallBar] {
        match self.bars.split_last() {
            Some((_, chained)) => chained,
            None => &[],
        }
    }

    pub fn final_bar(&self) -> Option<&WaterfallBar> {
        self.bars.last()
    }
}
