//! The domain store. Every variable has a fixed initial domain and a current domain which shrinks
//! through prunes and grows again through restores.
//!
//! All prunes are recorded on a [`Trail`], and restoring has to follow that trail in reverse: a
//! restore is only accepted when it undoes the most recent outstanding prune. This turns the
//! "restore exactly what was pruned" discipline which a search driver has to follow into something
//! that is checked.
//!
//! The mutating operations report a [`VariableId`] of another problem as
//! [`DomainError::UnknownVariable`]; the read accessors panic on one (see [`Domains::is_known`]).

use log::trace;

use crate::basic_types::DomainError;
use crate::basic_types::KeyedVec;
use crate::basic_types::Prune;
use crate::basic_types::Trail;
use crate::csp_assert_simple;
use crate::variables::VariableId;

#[derive(Clone, Debug)]
struct Domain {
    /// The initial domain, sorted ascending without duplicates.
    values: Box<[i32]>,
    /// `present[i]` is false iff `values[i]` is currently pruned.
    present: Vec<bool>,
    num_present: usize,
    /// Index into `values` of the assigned value.
    assigned: Option<usize>,
}

impl Domain {
    fn new(values: Box<[i32]>) -> Domain {
        let num_values = values.len();

        Domain {
            values,
            present: vec![true; num_values],
            num_present: num_values,
            assigned: None,
        }
    }

    fn index_of(&self, value: i32) -> Option<usize> {
        self.values.binary_search(&value).ok()
    }

    /// Whether the value at `idx` is part of the current domain. For an assigned variable that is
    /// only the assigned value, and only as long as it has not been pruned.
    fn is_current(&self, idx: usize) -> bool {
        self.present[idx] && self.assigned.map_or(true, |assigned| assigned == idx)
    }

    fn contains(&self, value: i32) -> bool {
        self.index_of(value).is_some_and(|idx| self.is_current(idx))
    }

    fn size(&self) -> usize {
        match self.assigned {
            Some(idx) => usize::from(self.present[idx]),
            None => self.num_present,
        }
    }

    fn iter(&self) -> impl Iterator<Item = i32> + '_ {
        self.values
            .iter()
            .enumerate()
            .filter(|(idx, _)| self.is_current(*idx))
            .map(|(_, value)| *value)
    }
}

#[derive(Clone, Debug, Default)]
pub struct Domains {
    domains: KeyedVec<VariableId, Domain>,
    trail: Trail<Prune>,
}

impl Domains {
    /// Creates a new variable with the given initial domain. The values are sorted and
    /// deduplicated; the caller ensures there is at least one.
    pub(crate) fn grow(&mut self, values: impl IntoIterator<Item = i32>) -> VariableId {
        let mut values: Vec<i32> = values.into_iter().collect();
        values.sort_unstable();
        values.dedup();
        csp_assert_simple!(!values.is_empty(), "a variable needs a non-empty domain");

        self.domains.push(Domain::new(values.into()))
    }

    pub fn num_variables(&self) -> usize {
        self.domains.len()
    }

    /// All variables, in creation order.
    pub fn variables(&self) -> impl Iterator<Item = VariableId> {
        self.domains.keys()
    }

    pub fn is_known(&self, variable: VariableId) -> bool {
        self.domains.get(variable).is_some()
    }

    pub fn initial_domain(&self, variable: VariableId) -> &[i32] {
        &self.domains[variable].values
    }

    pub fn is_assigned(&self, variable: VariableId) -> bool {
        self.domains[variable].assigned.is_some()
    }

    pub fn assigned_value(&self, variable: VariableId) -> Option<i32> {
        let domain = &self.domains[variable];
        domain.assigned.map(|idx| domain.values[idx])
    }

    /// The current domain in ascending order.
    ///
    /// # Panics
    /// If `variable` is not part of this store.
    pub fn current_domain(&self, variable: VariableId) -> impl Iterator<Item = i32> + '_ {
        self.domains[variable].iter()
    }

    pub fn current_domain_size(&self, variable: VariableId) -> usize {
        self.domains[variable].size()
    }

    pub fn contains(&self, variable: VariableId, value: i32) -> bool {
        self.domains[variable].contains(value)
    }

    /// Whether `value` was pruned and not yet restored. Independent of the assignment.
    pub fn is_pruned(&self, variable: VariableId, value: i32) -> bool {
        let domain = &self.domains[variable];
        domain
            .index_of(value)
            .is_some_and(|idx| !domain.present[idx])
    }

    pub fn assign(&mut self, variable: VariableId, value: i32) -> Result<(), DomainError> {
        let domain = self.domain_mut(variable)?;

        if domain.assigned.is_some() {
            return Err(DomainError::AlreadyAssigned(variable));
        }

        match domain.index_of(value) {
            Some(idx) if domain.present[idx] => {
                domain.assigned = Some(idx);
                Ok(())
            }
            _ => Err(DomainError::NotInDomain { variable, value }),
        }
    }

    pub fn unassign(&mut self, variable: VariableId) -> Result<(), DomainError> {
        self.domain_mut(variable)?
            .assigned
            .take()
            .map(|_| ())
            .ok_or(DomainError::NotAssigned(variable))
    }

    /// Prunes `value` from the domain of `variable`. Unlike [`Domains::remove`] this may also prune
    /// a value which is outside the current domain of an assigned variable, as long as it has not
    /// been pruned already.
    pub fn prune_value(&mut self, variable: VariableId, value: i32) -> Result<Prune, DomainError> {
        let domain = self
            .domains
            .get(variable)
            .ok_or(DomainError::UnknownVariable(variable))?;

        match domain.index_of(value) {
            None => Err(DomainError::UnknownValue { variable, value }),
            Some(idx) if !domain.present[idx] => Err(DomainError::AlreadyPruned { variable, value }),
            Some(idx) => Ok(self.prune_at(variable, idx)),
        }
    }

    /// Removes a value of the current domain. Used by the propagators, which only ever remove
    /// values they just read from the current domain.
    pub(crate) fn remove(&mut self, variable: VariableId, value: i32) -> Prune {
        let domain = &self.domains[variable];

        match domain.index_of(value) {
            Some(idx) if domain.is_current(idx) => self.prune_at(variable, idx),
            _ => panic!("{value} is not in the current domain of {variable}"),
        }
    }

    fn prune_at(&mut self, variable: VariableId, idx: usize) -> Prune {
        let domain = &mut self.domains[variable];
        csp_assert_simple!(domain.present[idx], "values are never pruned twice");

        domain.present[idx] = false;
        domain.num_present -= 1;

        let prune = Prune::new(variable, domain.values[idx]);
        trace!("pruned {prune}");
        self.trail.push(prune);

        prune
    }

    /// Restores a single prune; it has to be the most recent outstanding prune on the current
    /// decision level.
    pub fn restore_value(&mut self, variable: VariableId, value: i32) -> Result<(), DomainError> {
        self.restore(&[Prune::new(variable, value)])
    }

    /// Restores a list of prunes as returned by a propagator, most-recent-first. The list has to
    /// match the most recent prunes of the current decision level. It is checked as a whole before
    /// anything is restored, so on an error the domains are unchanged.
    pub fn restore(&mut self, pruned: &[Prune]) -> Result<(), DomainError> {
        let level = self.trail.current_level();

        for (offset, &prune) in pruned.iter().rev().enumerate() {
            self.check_restorable(prune)?;

            let expected = level
                .len()
                .checked_sub(offset + 1)
                .map(|idx| level[idx]);
            if expected != Some(prune) {
                return Err(DomainError::RestoreOutOfOrder {
                    restored: prune,
                    expected,
                });
            }
        }

        for _ in pruned {
            if let Some(prune) = self.trail.pop() {
                self.unprune(prune);
            }
        }

        Ok(())
    }

    fn check_restorable(&self, prune: Prune) -> Result<(), DomainError> {
        let Prune { variable, value } = prune;
        let domain = self
            .domains
            .get(variable)
            .ok_or(DomainError::UnknownVariable(variable))?;

        match domain.index_of(value) {
            None => Err(DomainError::UnknownValue { variable, value }),
            Some(idx) if domain.present[idx] => Err(DomainError::NotPruned { variable, value }),
            Some(_) => Ok(()),
        }
    }

    fn domain_mut(&mut self, variable: VariableId) -> Result<&mut Domain, DomainError> {
        self.domains
            .get_mut(variable)
            .ok_or(DomainError::UnknownVariable(variable))
    }

    fn unprune(&mut self, prune: Prune) {
        let domain = &mut self.domains[prune.variable];

        if let Some(idx) = domain.index_of(prune.value) {
            csp_assert_simple!(!domain.present[idx]);
            domain.present[idx] = true;
            domain.num_present += 1;
        }
    }

    /// The number of outstanding prunes on the trail, over all decision levels.
    pub fn num_trail_entries(&self) -> usize {
        self.trail.len()
    }

    pub fn decision_level(&self) -> usize {
        self.trail.get_decision_level()
    }

    /// Opens a new decision level. Prunes recorded from now on can be undone in one go with
    /// [`Domains::synchronise`].
    pub fn increase_decision_level(&mut self) {
        self.trail.increase_decision_level()
    }

    /// Backtracks to `decision_level`, restoring every prune made on higher levels. Returns the
    /// restored prunes, most-recent-first. Nothing is restored if `decision_level` is not below
    /// the current level.
    pub fn synchronise(&mut self, decision_level: usize) -> Vec<Prune> {
        if decision_level >= self.trail.get_decision_level() {
            return Vec::new();
        }

        let restored: Vec<Prune> = self.trail.synchronise(decision_level).collect();

        for &prune in &restored {
            self.unprune(prune);
        }

        restored
    }
}
