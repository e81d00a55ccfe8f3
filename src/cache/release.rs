//! Release Module
//!
//! Teardown capabilities applied to values leaving the cache.

// == Release ==
/// Teardown operation the cache applies to a value when its entry is removed.
///
/// The cache hands over ownership; implementations consume the value.
/// A panic here propagates to whoever triggered the removal.
pub trait Release<V> {
    fn release(&mut self, value: V);
}

impl<V, F> Release<V> for F
where
    F: FnMut(V),
{
    fn release(&mut self, value: V) {
        self(value)
    }
}

// == Destroy ==
/// Values that know how to tear themselves down (an editor closing its views,
/// dropping listeners, freeing buffers).
pub trait Destroy {
    fn destroy(self);
}

/// Releases values by calling [`Destroy::destroy`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DestroyOnRelease;

impl<V: Destroy> Release<V> for DestroyOnRelease {
    fn release(&mut self, value: V) {
        value.destroy();
    }
}

/// Releases values by dropping them.
#[derive(Debug, Clone, Copy, Default)]
pub struct DropOnRelease;

impl<V> Release<V> for DropOnRelease {
    fn release(&mut self, value: V) {
        drop(value);
    }
}
