#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use tagwise::prelude::*;
use tagwise::{AllTypes, ErrorSlot, Produced, Unchanged, error_adapter};

// ============================================================================
// Arithmetic tags with exact handlers on i32
// ============================================================================

pub struct Multiply;
impl Tag for Multiply {}

impl Handle<Multiply, i32> for i32 {
    type Output = Unchanged;
    fn handle(&mut self, _tag: Multiply, factor: i32) -> Unchanged {
        *self *= factor;
        Unchanged
    }
}

pub struct Add;
impl Tag for Add {}

impl Handle<Add, i32> for i32 {
    type Output = Unchanged;
    fn handle(&mut self, _tag: Add, delta: i32) -> Unchanged {
        *self += delta;
        Unchanged
    }
}

// ============================================================================
// Precedence fixtures: a catch-all with one exact override
// ============================================================================

pub struct Describe;
impl Tag for Describe {}

impl<V: std::fmt::Debug> HandleAll<V> for Describe {
    type Output = Produced<String>;
    fn handle_all(self, value: &mut V, _args: ()) -> Produced<String> {
        Produced(format!("{value:?}"))
    }
}

impl Handle<Describe> for String {
    type Output = Produced<String>;
    fn handle(&mut self, _tag: Describe, _args: ()) -> Produced<String> {
        Produced(format!("string of length {}", self.len()))
    }
}

// ============================================================================
// Universal interceptor collecting a rendering of every value it sees
// ============================================================================

pub struct Collect;
impl Tag for Collect {}

impl<V: std::fmt::Display> InterceptAll<Collect, V, Rc<RefCell<Vec<String>>>> for AllTypes {
    type Output = Unchanged;
    fn intercept_all(
        self,
        _tag: Collect,
        value: &mut V,
        log: Rc<RefCell<Vec<String>>>,
    ) -> Unchanged {
        log.borrow_mut().push(value.to_string());
        Unchanged
    }
}

// ============================================================================
// A fallible device using the out-parameter convention
// ============================================================================

pub struct Seek;
impl Tag for Seek {}

pub struct Tell;
impl Tag for Tell {}

#[derive(Debug, Default)]
pub struct Device {
    pub cursor: u32,
    pub fail_seek: bool,
    pub calls: Rc<RefCell<Vec<&'static str>>>,
}

impl TryHandle<Seek, u32> for Device {
    type Output = Unchanged;
    fn try_handle(&mut self, _tag: Seek, to: u32, errors: &mut ErrorSlot) -> Unchanged {
        self.calls.borrow_mut().push("seek");
        if self.fail_seek {
            errors.set("seek not permitted");
        } else {
            self.cursor = to;
        }
        Unchanged
    }
}

// Reset has both a plain handler and an out-parameter form; resolution must
// take the handler, keeping the chain infallible.
pub struct Reset;
impl Tag for Reset {}

impl Handle<Reset> for Device {
    type Output = Unchanged;
    fn handle(&mut self, _tag: Reset, _args: ()) -> Unchanged {
        self.calls.borrow_mut().push("reset");
        self.cursor = 0;
        Unchanged
    }
}

impl TryHandle<Reset> for Device {
    type Output = Unchanged;
    fn try_handle(&mut self, _tag: Reset, _args: (), errors: &mut ErrorSlot) -> Unchanged {
        errors.set("reset must not go through the adapter");
        Unchanged
    }
}

impl TryHandle<Tell> for Device {
    type Output = Produced<u32>;
    fn try_handle(&mut self, _tag: Tell, _args: (), errors: &mut ErrorSlot) -> Produced<u32> {
        self.calls.borrow_mut().push("tell");
        let _ = errors;
        Produced(self.cursor)
    }
}

error_adapter!(Device);
