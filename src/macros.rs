//! Macros for building element sources and rule bindings

/// Creates a composite element source over the given child sources.
///
/// The result is boxed but not simplified.
#[macro_export]
macro_rules! composite {
    ($($child:expr),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut composite = $crate::prelude::CompositeElementSource::new();
        $( composite.add($child); )*
        let boxed: $crate::prelude::BoxSource<_> = Box::new(composite);
        boxed
    }};
}

/// Creates fresh variable bindings from type tag letters.
///
/// `bindings![m, t, t]` yields three free variables tagged method, type
/// and type, named `?x0`, `?x1` and `?x2`.
#[macro_export]
macro_rules! bindings {
    ($($tag:ident),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut variables: Vec<$crate::prelude::Variable> = vec![];
        $(
            let v = $crate::prelude::Variable::new_free(&variables, $crate::bindings!(@tag $tag));
            variables.push(v);
        )*
        variables
            .into_iter()
            .map($crate::prelude::Binding::from)
            .collect::<Vec<_>>()
    }};

    (@tag p) => { $crate::prelude::TypeTag::Package };
    (@tag t) => { $crate::prelude::TypeTag::Type };
    (@tag f) => { $crate::prelude::TypeTag::Field };
    (@tag m) => { $crate::prelude::TypeTag::Method };
    (@tag a) => { $crate::prelude::TypeTag::TypeName };
    (@tag b) => { $crate::prelude::TypeTag::FieldName };
    (@tag c) => { $crate::prelude::TypeTag::MethodName };
}

/// Inserts ground facts into a [`FactBase`](crate::database::FactBase).
///
/// Each argument is a tag letter and a value, e.g.
/// `before_calls(m "A.run", m "B.go")`. Evaluates to the first insertion
/// error, or `Ok(())`.
#[macro_export]
macro_rules! facts {
    ($db:ident, $catalog:expr => { $($rel:ident($($tag:ident $value:expr),*));* $(;)? }) => {
        (|| -> Result<(), $crate::prelude::FactError> {
            $(
                $db.insert(
                    $catalog,
                    stringify!($rel),
                    &[$($crate::prelude::Binding::ground($value, $crate::bindings!(@tag $tag))),*],
                )?;
            )*
            Ok(())
        })()
    };
}
