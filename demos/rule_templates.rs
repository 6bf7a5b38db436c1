use lsd_rules::prelude::*;
use lsd_rules::facts;

fn main() -> Result<(), FactError> {
    let catalog = Catalog::global();
    let options = RestrictionOptions::default();

    // Record some facts about the old version of a program.
    let mut db = FactBase::new();
    facts!(db, catalog => {
        before_type(t "shop.Cart", a "Cart", p "shop");
        before_type(t "shop.Item", a "Item", p "shop");
        before_method(m "shop.Cart%.total()", c "total", t "shop.Cart");
        before_calls(m "shop.Cart%.total()", m "shop.Item%.price()");
        before_accesses(f "shop.Item%.price", m "shop.Item%.price()");
    })?;

    // Every conclusion with a key argument gets a template with a fresh
    // variable at that key, and a list of antecedents it may be paired
    // with. Class-level `*_dependency` conclusions have no key.
    for conclusion in catalog.predicates() {
        if !conclusion.is_conclusion_predicate()
            || !conclusion.conclusion_constraints(&options)
            || conclusion.key_argument().is_none()
        {
            continue;
        }
        let template = conclusion.fresh_bindings_for_conclusion();
        let args: Vec<String> = template.iter().map(|b| b.to_string()).collect();
        let antecedents = catalog
            .predicates()
            .into_iter()
            .filter(|p| p.allowed_in_same_rule(conclusion, None, &options))
            .count();
        println!(
            "{}({}) <- {} candidate antecedents",
            conclusion.name(),
            args.join(", "),
            antecedents
        );
    }

    // Everything that refers to Item.price(), in storage order.
    let methods = ["before_calls", "before_accesses"];
    for row in drain(db.query_family(&methods, &[None, Some("shop.Item%.price()")])) {
        println!("{} -> {}", row[0], row[1]);
    }

    Ok(())
}
