use crate::constraints::Constraint;
use crate::variables::VariableId;
use crate::Domains;

/// The constraint `sum(terms) = rhs`.
#[derive(Clone, Debug)]
pub struct LinearEqual {
    terms: Box<[VariableId]>,
    rhs: i32,
}

impl LinearEqual {
    pub fn new(terms: impl Into<Box<[VariableId]>>, rhs: i32) -> Self {
        LinearEqual {
            terms: terms.into(),
            rhs,
        }
    }
}

/// A variable of the sum together with the number of times it occurs in the terms.
struct Term {
    multiplicity: i64,
    values: Vec<i64>,
}

impl Constraint for LinearEqual {
    fn name(&self) -> &str {
        "LinearEqual"
    }

    fn scope(&self) -> &[VariableId] {
        &self.terms
    }

    fn check(&self, values: &[i32]) -> bool {
        values.iter().map(|&value| i64::from(value)).sum::<i64>() == i64::from(self.rhs)
    }

    fn has_support(&self, domains: &Domains, variable: VariableId, value: i32) -> bool {
        let mut remaining = i64::from(self.rhs);
        let mut others: Vec<(VariableId, Term)> = Vec::new();
        let mut occurs = false;

        for &term in self.terms.iter() {
            if term == variable {
                occurs = true;
                remaining -= i64::from(value);
            } else if let Some((_, other)) = others.iter_mut().find(|(other, _)| *other == term) {
                other.multiplicity += 1;
            } else {
                let values: Vec<i64> = domains.current_domain(term).map(i64::from).collect();
                if values.is_empty() {
                    return false;
                }
                others.push((
                    term,
                    Term {
                        multiplicity: 1,
                        values,
                    },
                ));
            }
        }

        if !occurs {
            return false;
        }

        let others: Vec<Term> = others.into_iter().map(|(_, term)| term).collect();

        // The smallest and largest sums the terms from index i onwards can still reach.
        let mut min_suffix = vec![0; others.len() + 1];
        let mut max_suffix = vec![0; others.len() + 1];
        for (idx, term) in others.iter().enumerate().rev() {
            let smallest = term.values.first().copied().unwrap_or_default();
            let largest = term.values.last().copied().unwrap_or_default();
            min_suffix[idx] = min_suffix[idx + 1] + term.multiplicity * smallest;
            max_suffix[idx] = max_suffix[idx + 1] + term.multiplicity * largest;
        }

        reaches(&others, 0, remaining, &min_suffix, &max_suffix)
    }
}

fn reaches(terms: &[Term], idx: usize, remaining: i64, min_suffix: &[i64], max_suffix: &[i64]) -> bool {
    if remaining < min_suffix[idx] || remaining > max_suffix[idx] {
        return false;
    }

    let Some(term) = terms.get(idx) else {
        return remaining == 0;
    };

    term.values.iter().any(|&value| {
        reaches(
            terms,
            idx + 1,
            remaining - term.multiplicity * value,
            min_suffix,
            max_suffix,
        )
    })
}
