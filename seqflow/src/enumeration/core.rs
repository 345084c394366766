// The enumeration protocol. An enumeration is a producer that pushes
// elements one at a time into a visitor. The visitor answers with a
// ControlFlow: Continue asks for more, Break asks production to stop, and
// the producer must not call the visitor again after a Break.
//
// A producer's own return value is only a hint. Whether a visit was
// stopped is decided by watching the visitor: `drive` records the Break on
// the way out, and everything that needs to know (visit, concat, union)
// goes through it. Combinators that end production by themselves, as take
// does, report Continue.

use std::fmt;
use std::ops::ControlFlow;
use std::rc::Rc;

/// The visitor side of the protocol.
pub type Visitor<'v, T> = dyn FnMut(T) -> ControlFlow<()> + 'v;

pub(crate) type Producer<'a, T> = dyn Fn(&mut Visitor<'_, T>) -> ControlFlow<()> + 'a;

/// A lazily evaluated, push-based sequence of elements.
///
/// Nothing happens until the enumeration is visited, and every visit runs
/// production again from the start; nothing is memoized. Cloning is cheap,
/// as the producer is shared.
///
/// An enumeration may be *absent* (see [`Enumeration::absent`]). An absent
/// enumeration produces no elements and never faults; every operation
/// treats it as empty unless documented otherwise.
pub struct Enumeration<'a, T> {
    producer: Option<Rc<Producer<'a, T>>>,
}

// the handle is a single optional fat pointer
#[cfg(target_pointer_width = "64")]
static_assertions::assert_eq_size!(Enumeration<'static, u8>, [u8; 16]);

impl<'a, T: 'a> Enumeration<'a, T> {
    /// Create an enumeration from a producer function.
    ///
    /// The producer is called once per visit with the visitor, and must
    /// stop calling it as soon as it returns [`ControlFlow::Break`]. What
    /// it returns itself doesn't matter.
    pub fn new<F>(producer: F) -> Self
    where
        F: Fn(&mut Visitor<'_, T>) -> ControlFlow<()> + 'a,
    {
        Self {
            producer: Some(Rc::new(producer)),
        }
    }

    /// The absent enumeration.
    ///
    /// It produces nothing, like an empty one, but operations that give the
    /// missing case a meaning of its own (such as [`Enumeration::except`])
    /// can tell it apart.
    pub fn absent() -> Self {
        Self { producer: None }
    }

    /// Whether this is the absent enumeration.
    pub fn is_absent(&self) -> bool {
        self.producer.is_none()
    }

    pub(crate) fn producer(&self) -> Option<Rc<Producer<'a, T>>> {
        self.producer.clone()
    }

    /// Run production, pushing every element into `visitor` until it
    /// breaks or the elements run out.
    ///
    /// Returns [`ControlFlow::Break`] if the visitor stopped production.
    pub fn visit<V>(&self, mut visitor: V) -> ControlFlow<()>
    where
        V: FnMut(T) -> ControlFlow<()>,
    {
        match &self.producer {
            Some(producer) => drive(&**producer, &mut visitor),
            None => ControlFlow::Continue(()),
        }
    }

    /// Call `f` on every element.
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(T),
    {
        let _ = self.visit(|item| {
            f(item);
            ControlFlow::Continue(())
        });
    }
}

/// Run `producer` into `visit`. Returns `Break` exactly when `visit` broke,
/// whatever the producer returns, and never calls `visit` again after that.
pub(crate) fn drive<T>(producer: &Producer<'_, T>, visit: &mut Visitor<'_, T>) -> ControlFlow<()> {
    let mut stopped = false;
    let _ = producer(&mut |item| {
        if stopped {
            return ControlFlow::Break(());
        }
        let flow = visit(item);
        stopped = flow.is_break();
        flow
    });
    if stopped {
        ControlFlow::Break(())
    } else {
        ControlFlow::Continue(())
    }
}

impl<T> Clone for Enumeration<'_, T> {
    fn clone(&self) -> Self {
        Self {
            producer: self.producer.clone(),
        }
    }
}

impl<T> Default for Enumeration<'_, T> {
    fn default() -> Self {
        Self { producer: None }
    }
}

impl<T> fmt::Debug for Enumeration<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Enumeration")
            .field("absent", &self.producer.is_none())
            .finish_non_exhaustive()
    }
}
