use crate::core::constructor::{FunctorId, GenericConstructorType};
use crate::core::logic_variable::Var;
use crate::core::source::{BoxSource, ElementSource, Status};
use crate::core::types::{Type, TypeConstructor};
use std::cell::Cell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

/// One scripted answer of a [`scripted`] source.
#[derive(Debug, Clone, PartialEq)]
pub enum Step<T> {
    NotReady,
    Ready(T),
}

/// A source that walks through `steps` and then reports exhaustion.
///
/// `NotReady` steps are consumed by polling; a `Ready` step stays until
/// its element is taken. The returned counter records every `status` call.
pub fn scripted<T: 'static>(steps: Vec<Step<T>>) -> (BoxSource<T>, Rc<Cell<usize>>) {
    let polls = Rc::new(Cell::new(0));
    let source = ScriptedSource {
        steps: steps.into(),
        polls: polls.clone(),
    };
    (Box::new(source), polls)
}

struct ScriptedSource<T> {
    steps: VecDeque<Step<T>>,
    polls: Rc<Cell<usize>>,
}

impl<T> fmt::Debug for ScriptedSource<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Scripted({})", self.steps.len())
    }
}

impl<T: 'static> ElementSource<T> for ScriptedSource<T> {
    fn status(&mut self) -> Status {
        self.polls.set(self.polls.get() + 1);
        match self.steps.front() {
            None => Status::NoMoreElements,
            Some(Step::Ready(_)) => Status::ElementReady,
            Some(Step::NotReady) => {
                self.steps.pop_front();
                Status::NoElementsReady
            }
        }
    }

    fn next_element(&mut self) -> T {
        match self.steps.pop_front() {
            Some(Step::Ready(x)) => x,
            _ => panic!("no element ready in scripted source"),
        }
    }

    fn simplify(self: Box<Self>) -> BoxSource<T> {
        self
    }
}

pub fn int() -> Type {
    Type::atomic("Int")
}

pub fn string() -> Type {
    Type::atomic("String")
}

/// `pair: <?a, ?b> -> Pair<?a, ?b>`, with its two type variables.
pub fn pair_constructor() -> (GenericConstructorType, Var, Var) {
    let a = Var::new("a");
    let b = Var::new("b");
    let pair = TypeConstructor::new("Pair", 2);
    let ctor = GenericConstructorType::new(
        FunctorId::new("pair", 2),
        Type::tuple(vec![Type::var(a), Type::var(b)]),
        pair.apply(vec![Type::var(a), Type::var(b)]),
    );
    (ctor, a, b)
}
