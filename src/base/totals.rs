use crate::base;

/// A company and its layoff total across all of its events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyTotal {
    pub company: base::Company,
    pub laid_off: base::Count,
}

/// A calendar month and its layoff total across all events in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthTotal {
    pub month: base::Month,
    pub laid_off: base::Count,
}

/// Sums layoffs per company and returns the `limit` largest totals in
/// descending order. Companies tied on total are ordered by name. Events with
/// an unreported headcount contribute zero to their company's total.
pub fn top_companies(rl: &base::Recordlist, limit: usize) -> Vec<CompanyTotal> {
    let agg = rl
        .iter()
        .map(|r| (r.company().clone(), r.laid_off().unwrap_or_default()))
        .collect::<base::Aggregate<_, _>>();
    let mut totals = agg
        .into_iter()
        .map(|(company, laid_off)| CompanyTotal { company, laid_off })
        .collect::<Vec<_>>();
    totals.sort_unstable_by(|a, b| {
        b.laid_off
            .cmp(&a.laid_off)
            .then_with(|| a.company.cmp(&b.company))
    });
    totals.truncate(limit);
    totals
}

/// Sums layoffs per calendar month, in chronological order. Events without a
/// date are excluded; events with an unreported headcount contribute zero to
/// their month's total.
pub fn by_month(rl: &base::Recordlist) -> Vec<MonthTotal> {
    let agg = rl
        .iter()
        .filter_map(|r| {
            let month = base::Month::from(r.date()?);
            Some((month, r.laid_off().unwrap_or_default()))
        })
        .collect::<base::Aggregate<_, _>>();
    let mut totals = agg
        .into_iter()
        .map(|(month, laid_off)| MonthTotal { month, laid_off })
        .collect::<Vec<_>>();
    totals.sort_unstable_by_key(|t| t.month);
    totals
}
