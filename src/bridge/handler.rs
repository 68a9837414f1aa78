use std::marker::PhantomData;

use crate::mvi::Effect;

/// Consumer of one store's effects.
///
/// Implementations map each effect variant to coordinator operations or
/// collaborator calls with an exhaustive `match` and no other branching.
pub trait EffectHandler<E: Effect>: Send + 'static {
    fn handle(&mut self, effect: E);
}

/// [`EffectHandler`] backed by a closure. Built with [`handler_fn`].
pub struct FnHandler<F, E> {
    f: F,
    _effect: PhantomData<fn(E)>,
}

/// Wrap a closure as an [`EffectHandler`].
pub fn handler_fn<E, F>(f: F) -> FnHandler<F, E>
where
    E: Effect,
    F: FnMut(E) + Send + 'static,
{
    FnHandler {
        f,
        _effect: PhantomData,
    }
}

impl<E, F> EffectHandler<E> for FnHandler<F, E>
where
    E: Effect,
    F: FnMut(E) + Send + 'static,
{
    fn handle(&mut self, effect: E) {
        (self.f)(effect)
    }
}
