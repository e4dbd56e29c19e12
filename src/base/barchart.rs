use crate::base;

/// One already-aggregated chart entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub label: String,
    pub value: base::Count,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Config {
    pub charset: base::Charset,
    pub term_width: usize,
    pub rows: Vec<Row>,
}

pub struct Barchart {
    charset: base::Charset,
    rows: Vec<Row>,
    label_charlen: usize,
    max_val: base::Count,
    max_barlen: usize,
}

impl Config {
    pub fn to_barchart(&self) -> Barchart {
        let label_charlen = self
            .rows
            .iter()
            .map(|r| r.label.chars().count())
            .max()
            .unwrap_or_default();
        let max_val = self
            .rows
            .iter()
            .map(|r| r.value)
            .max()
            .unwrap_or_default();
        // Labels wider than the terminal still leave a sliver of bar.
        let max_barlen = self
            .term_width
            .max(base::util::MIN_TERM_WIDTH)
            .saturating_sub(
                label_charlen
                    + base::util::BOUNDING_SPACES_COUNT
                    + 1 // vertical axis just before bar
                    + max_val.charlen(),
            )
            .max(1);

        Barchart {
            charset: self.charset.clone(),
            rows: self.rows.clone(),
            label_charlen,
            max_val,
            max_barlen,
        }
    }
}

impl Barchart {
    fn barlen(&self, val: base::Count) -> usize {
        if self.max_val == base::Count(0) {
            return 0;
        }
        let x = (u64::from(val) as f64) / (u64::from(self.max_val) as f64)
            * (self.max_barlen as f64);
        self.max_barlen.min(x.round() as usize)
    }

    fn draw(&self, w: &mut impl std::fmt::Write, row: &Row) -> std::fmt::Result {
        write!(w, "{:<1$} ", row.label, self.label_charlen)?;
        w.write_char(self.charset.chart_axis)?;
        let barlen = self.barlen(row.value);
        if barlen > 0 {
            let mut bars = self.charset.chart_bar.to_string().repeat(barlen);
            if self.charset.color {
                bars = colored::Colorize::red(bars.as_str()).to_string();
            }
            w.write_str(&bars)?;
            w.write_char(' ')?;
        }
        writeln!(w, "{}", row.value)
    }
}

impl std::fmt::Display for Barchart {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in &self.rows {
            self.draw(f, row)?;
        }
        Ok(())
    }
}
