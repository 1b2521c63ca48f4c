use crate::error;
use crate::lang::{Error, Token};

type Result<T> = std::result::Result<T, Error>;

/// Capacity of the evaluation stack. The (STACK_SIZE + 1)th push is a
/// fault, never a reallocation.
pub const STACK_SIZE: usize = 1000;

/// ## Fixed-capacity arena stack
///
/// An old-fashioned preallocated stack: STACK_SIZE slots plus a wasted
/// zeroth slot, so that index 0 can mean "nothing" in both the `top`
/// and `prev` links. Occupied slots chain downward from `top` through
/// `prev`; free slots chain from `free` through the same field. Push
/// and pop are pointer swaps between the two chains, so the stack
/// never allocates after construction.
pub struct Stack {
    top: usize,
    free: usize,
    frames: Vec<Frame>,
}

struct Frame {
    // Some(_) exactly while the slot is on the occupied chain.
    payload: Option<Token>,
    prev: usize,
}

impl Stack {
    pub fn new() -> Stack {
        let frames = (0..=STACK_SIZE)
            .map(|slot| Frame {
                payload: None,
                prev: if 0 < slot && slot < STACK_SIZE {
                    slot + 1
                } else {
                    0
                },
            })
            .collect();
        Stack {
            top: 0,
            free: 1,
            frames,
        }
    }

    /// Stores a token in the first free slot and makes that slot the
    /// new top. Fails with STACK OVERFLOW once all slots are occupied.
    pub fn push(&mut self, token: Token) -> Result<()> {
        if self.free == 0 {
            return Err(error!(StackOverflow));
        }
        let slot = self.free;
        self.free = self.frames[slot].prev;
        self.frames[slot].payload = Some(token);
        self.frames[slot].prev = self.top;
        self.top = slot;
        Ok(())
    }

    /// Removes and returns the top token. Fails with STACK UNDERFLOW
    /// on an empty stack.
    pub fn pop(&mut self) -> Result<Token> {
        if self.top == 0 {
            return Err(error!(StackUnderflow));
        }
        let slot = self.top;
        match self.frames[slot].payload.take() {
            Some(token) => {
                self.top = self.frames[slot].prev;
                self.frames[slot].prev = self.free;
                self.free = slot;
                Ok(token)
            }
            None => Err(error!(InternalError; "STACK CHAIN BROKEN")),
        }
    }

    /// Pops the two operands of a dyadic operator. The top of the stack
    /// is the right-hand side, so `10 2 -` comes back as `(10, 2)`.
    pub fn pop_2(&mut self) -> Result<(Token, Token)> {
        let two = self.pop()?;
        let one = self.pop()?;
        Ok((one, two))
    }

    pub fn is_empty(&self) -> bool {
        self.top == 0
    }

    /// Walks the occupied chain without disturbing it, most recently
    /// pushed slot first. This is the `.S` diagnostic view.
    pub fn iter(&self) -> Frames<'_> {
        Frames {
            stack: self,
            next: self.top,
        }
    }
}

impl Default for Stack {
    fn default() -> Stack {
        Stack::new()
    }
}

pub struct Frames<'a> {
    stack: &'a Stack,
    next: usize,
}

impl<'a> Iterator for Frames<'a> {
    type Item = (usize, &'a Token);

    fn next(&mut self) -> Option<Self::Item> {
        if self.next == 0 {
            return None;
        }
        let slot = self.next;
        let frame = &self.stack.frames[slot];
        debug_assert!(frame.payload.is_some());
        self.next = frame.prev;
        frame.payload.as_ref().map(|token| (slot, token))
    }
}
