/*!
The Luby sequence, used to schedule restarts.

The sequence is 1, 1, 2, 1, 1, 2, 4, 1, 1, 2, 1, 1, 2, 4, 8, …
(<https://oeis.org/A182105>), and the [Luby] iterator steps through it from the start.

```rust
# use ordered_ramsey::generic::luby::Luby;
let prefix = Luby::default().take(7).collect::<Vec<_>>();
assert_eq!(prefix, vec![1, 1, 2, 1, 1, 2, 4]);
```
*/

pub type LubyRepresentation = u64;

/// The element of the Luby sequence at `index`, counting from zero.
pub fn luby(index: LubyRepresentation) -> LubyRepresentation {
    let mut index = index;
    let mut size: LubyRepresentation = 1;
    let mut exponent = 0;

    while size < index + 1 {
        exponent += 1;
        size = 2 * size + 1;
    }

    while size - 1 != index {
        size = (size - 1) >> 1;
        exponent -= 1;
        index %= size;
    }

    1 << exponent
}

#[derive(Clone, Debug, Default)]
pub struct Luby {
    index: LubyRepresentation,
}

impl Iterator for Luby {
    type Item = LubyRepresentation;

    fn next(&mut self) -> Option<Self::Item> {
        let value = luby(self.index);
        self.index += 1;
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence() {
        let expected = [
            1, 1, 2, 1, 1, 2, 4, 1, 1, 2, 1, 1, 2, 4, 8, 1, 1, 2, 1, 1, 2, 4, 1, 1, 2, 1, 1, 2, 4, 8, 16,
        ];
        assert!(Luby::default().zip(expected).all(|(a, b)| a == b));
    }

    #[test]
    fn powers_close_blocks() {
        for exponent in 0..12 {
            assert_eq!(luby((1 << (exponent + 1)) - 2), 1 << exponent);
        }
    }
}
