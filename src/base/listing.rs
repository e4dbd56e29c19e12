use crate::base;

#[derive(Debug, PartialEq, Eq)]
pub struct Config {
    pub charset: base::Charset,

    /// Index shown for the first row. Subsequent rows count up from it.
    pub start_index: usize,

    pub rl: base::Recordlist,

    /// Appended verbatim to the final row.
    pub annotation: Option<String>,
}

pub struct Listing {
    charset: base::Charset,
    start_index: usize,
    rl: base::Recordlist,
    annotation: Option<String>,
    index_charlen: usize,
    company_charlen: usize,
    count_charlen: usize,
}

impl Config {
    pub fn to_listing(&self) -> Listing {
        let last_index = self.start_index + self.rl.len().saturating_sub(1);
        let index_charlen = base::util::count_digits(last_index as u64);
        let company_charlen = self
            .rl
            .iter()
            .map(|r| r.company().str().chars().count())
            .max()
            .unwrap_or_default();
        let count_charlen = self
            .rl
            .iter()
            .map(|r| match r.laid_off() {
                Some(n) => n.charlen(),
                None => 1, // ?
            })
            .max()
            .unwrap_or(1);

        Listing {
            charset: self.charset.clone(),
            start_index: self.start_index,
            rl: self.rl.clone(),
            annotation: self.annotation.clone(),
            index_charlen,
            company_charlen,
            count_charlen,
        }
    }
}

impl Listing {
    fn draw(&self, w: &mut impl std::fmt::Write, i: usize, r: &base::Record) -> std::fmt::Result {
        use std::fmt::Write;

        let mut line = String::new();
        write!(line, "{:>1$}. ", self.start_index + i, self.index_charlen)?;
        match r.date() {
            Some(dt) => write!(line, "{}", dt)?,
            None => {
                for _ in 0..10 {
                    line.push(self.charset.dash);
                }
            }
        }
        let count = match r.laid_off() {
            Some(n) => n.to_string(),
            None => "?".to_string(),
        };
        write!(line, "  {:>1$}", count, self.count_charlen)?;
        write!(line, "  {:<1$}", r.company().str(), self.company_charlen)?;
        if let Some(hq) = r.headquarters() {
            write!(line, "  {}", hq)?;
        }
        while line.ends_with(' ') {
            line.pop();
        }
        if i + 1 == self.rl.len() {
            if let Some(annotation) = &self.annotation {
                line.push_str(annotation);
            }
        }
        writeln!(w, "{}", line)
    }
}

impl std::fmt::Display for Listing {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, r) in self.rl.iter().enumerate() {
            self.draw(f, i, r)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use indoc::indoc;
    use rstest::rstest;

    use super::*;
    use crate::base::charset::Charset;

    #[rstest]
    #[case(1, "", "")]
    #[case(
        1,
        r#"
            {"c":"Stealth Startup","l":50}
            {"d":"2022-11-09","c":"Meta","h":"Menlo Park","l":11000}
            {"d":"2023-01-20","c":"Alphabet","h":"Mountain View","l":12000}
            {"d":"2023-04-03","c":"Acme"}
        "#,
        indoc!("
            1. ----------      50  Stealth Startup
            2. 2022-11-09  11,000  Meta             Menlo Park
            3. 2023-01-20  12,000  Alphabet         Mountain View
            4. 2023-04-03       ?  Acme
        ")
    )]
    #[case(
        9,
        r#"{"d":"2023-01-20","c":"Alphabet","h":"Mountain View","l":12000}"#,
        indoc!("
            9. 2023-01-20  12,000  Alphabet  Mountain View
        ")
    )]
    #[case(
        99,
        r#"
            {"c":"A"}
            {"d":"2023-01-01","c":"B","l":1}
        "#,
        indoc!("
             99. ----------  ?  A
            100. 2023-01-01  1  B
        ")
    )]
    fn test_listing(#[case] start_index: usize, #[case] rl: base::Recordlist, #[case] want: &str) {
        let config = Config {
            charset: Charset::default(),
            start_index,
            rl,
            annotation: None,
        };
        assert_eq!(config.to_listing().to_string(), want)
    }

    #[test]
    fn test_annotation_lands_on_final_row() {
        let config = Config {
            charset: Charset::default(),
            start_index: 2,
            rl: r#"{"d":"2023-01-20","c":"Alphabet","l":12000}"#.parse().unwrap(),
            annotation: Some(" <- [REMOVED]".to_string()),
        };
        assert_eq!(
            config.to_listing().to_string(),
            "2. 2023-01-20  12,000  Alphabet <- [REMOVED]\n",
        )
    }
}
