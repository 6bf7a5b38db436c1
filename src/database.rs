use crate::catalog::{Binding, Catalog};
use crate::core::source::{self, BoxSource, CompositeElementSource, ElementSource};
use crate::error::FactError;
use std::collections::HashMap;
use std::sync::Arc;

/// Ground argument values of one fact, in signature order.
pub type Row = Arc<[Arc<str>]>;

/// In-memory store of ground facts, one table per predicate.
///
/// Queries hand out element sources that share the table they read, so
/// later inserts never disturb a running enumeration.
#[derive(Debug, Clone, Default)]
pub struct FactBase {
    tables: HashMap<String, Arc<Vec<Row>>>,
}

impl FactBase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a ground fact for the catalog predicate `name`.
    pub fn insert(
        &mut self,
        catalog: &Catalog,
        name: &str,
        bindings: &[Binding],
    ) -> Result<(), FactError> {
        let predicate = catalog
            .get(name)
            .ok_or_else(|| FactError::UnknownPredicate(name.to_string()))?;
        if !predicate.type_checks(bindings) {
            return Err(FactError::IllTyped {
                signature: predicate.to_string(),
            });
        }

        let row = bindings
            .iter()
            .enumerate()
            .map(|(position, b)| {
                b.ground_value()
                    .map(Arc::<str>::from)
                    .ok_or_else(|| FactError::NotGround {
                        predicate: name.to_string(),
                        position,
                    })
            })
            .collect::<Result<Row, _>>()?;

        let table = self.tables.entry(name.to_string()).or_default();
        Arc::make_mut(table).push(row);
        Ok(())
    }

    pub fn len(&self, name: &str) -> usize {
        self.tables.get(name).map_or(0, |t| t.len())
    }

    /// Facts of `name` that agree with every bound position of `pattern`.
    ///
    /// `None` leaves a position free. Positions past the end of the
    /// pattern are free as well.
    pub fn query(&self, name: &str, pattern: &[Option<&str>]) -> BoxSource<Row> {
        let table = match self.tables.get(name) {
            Some(table) => table.clone(),
            None => return source::empty(),
        };
        let bound: Vec<(usize, Arc<str>)> = pattern
            .iter()
            .enumerate()
            .filter_map(|(i, value)| value.map(|v| (i, Arc::from(v))))
            .collect();

        let rows = (0..table.len()).filter_map(move |i| {
            let row = &table[i];
            let matches = bound
                .iter()
                .all(|(pos, value)| row.get(*pos).map_or(false, |v| v == value));
            if matches {
                Some(row.clone())
            } else {
                None
            }
        });
        source::from_iter(rows)
    }

    /// Facts of every predicate in `names`, in that order.
    pub fn query_family(&self, names: &[&str], pattern: &[Option<&str>]) -> BoxSource<Row> {
        let mut composite = CompositeElementSource::new();
        for name in names {
            composite.add(self.query(name, pattern));
        }
        Box::new(composite).simplify()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{TypeTag, Variable};
    use crate::core::source::{drain, Status};

    fn call(caller: &str, callee: &str) -> Vec<Binding> {
        vec![
            Binding::ground(caller, TypeTag::Method),
            Binding::ground(callee, TypeTag::Method),
        ]
    }

    fn values(rows: impl Iterator<Item = Row>) -> Vec<Vec<String>> {
        rows.map(|r| r.iter().map(|v| v.to_string()).collect())
            .collect()
    }

    fn sample() -> FactBase {
        let catalog = Catalog::standard();
        let mut db = FactBase::new();
        db.insert(&catalog, "before_calls", &call("A.run", "B.go")).unwrap();
        db.insert(&catalog, "before_calls", &call("A.run", "C.stop")).unwrap();
        db.insert(&catalog, "before_calls", &call("D.main", "A.run")).unwrap();
        db.insert(&catalog, "after_calls", &call("A.run", "E.go")).unwrap();
        db
    }

    #[test]
    fn insert_checks_the_catalog() {
        let catalog = Catalog::standard();
        let mut db = FactBase::new();
        assert_eq!(
            db.insert(&catalog, "before_bogus", &call("a", "b")),
            Err(FactError::UnknownPredicate("before_bogus".into()))
        );
        assert_eq!(
            db.insert(
                &catalog,
                "before_calls",
                &[Binding::ground("A.run", TypeTag::Method)]
            ),
            Err(FactError::IllTyped {
                signature: "before_calls(m,m)".into()
            })
        );
        assert_eq!(
            db.insert(
                &catalog,
                "before_calls",
                &[
                    Binding::ground("A.run", TypeTag::Method),
                    Binding::variable(Variable::new("?x", TypeTag::Method)),
                ]
            ),
            Err(FactError::NotGround {
                predicate: "before_calls".into(),
                position: 1
            })
        );
        assert_eq!(db.len("before_calls"), 0);
    }

    #[test]
    fn free_pattern_returns_every_fact() {
        let db = sample();
        assert_eq!(db.len("before_calls"), 3);
        assert_eq!(drain(db.query("before_calls", &[])).count(), 3);
    }

    #[test]
    fn bound_positions_filter_facts() {
        let db = sample();
        let rows = drain(db.query("before_calls", &[Some("A.run"), None]));
        assert_eq!(
            values(rows),
            vec![vec!["A.run", "B.go"], vec!["A.run", "C.stop"]]
        );

        let rows = drain(db.query("before_calls", &[None, Some("A.run")]));
        assert_eq!(values(rows), vec![vec!["D.main", "A.run"]]);
    }

    #[test]
    fn unknown_tables_are_empty() {
        let db = sample();
        let mut s = db.query("deleted_calls", &[]);
        assert_eq!(s.status(), Status::NoMoreElements);
    }

    #[test]
    fn family_queries_concatenate_tables() {
        let db = sample();
        let rows = drain(db.query_family(&["after_calls", "before_calls"], &[Some("A.run")]));
        assert_eq!(
            values(rows),
            vec![
                vec!["A.run", "E.go"],
                vec!["A.run", "B.go"],
                vec!["A.run", "C.stop"]
            ]
        );

        let single = db.query_family(&["after_calls"], &[]);
        assert_eq!(format!("{:?}", single), "Iter");
    }

    #[test]
    fn facts_macro_inserts_ground_rows() {
        let catalog = Catalog::standard();
        let mut db = FactBase::new();
        let result = crate::facts!(db, &catalog => {
            before_type(t "a.Foo", a "Foo", p "a");
            before_subtype(t "a.Base", t "a.Foo");
        });
        assert_eq!(result, Ok(()));
        assert_eq!(db.len("before_type"), 1);

        let result = crate::facts!(db, &catalog => {
            before_subtype(t "a.Base");
        });
        assert!(matches!(result, Err(FactError::IllTyped { .. })));
        assert_eq!(db.len("before_subtype"), 1);
    }

    #[test]
    fn running_queries_do_not_see_later_inserts() {
        let catalog = Catalog::standard();
        let mut db = sample();
        let running = db.query("after_calls", &[]);
        db.insert(&catalog, "after_calls", &call("F.x", "G.y")).unwrap();
        assert_eq!(drain(running).count(), 1);
        assert_eq!(db.len("after_calls"), 2);
    }
}
