//! Scoped name→value storage with TeX grouping semantics.
//!
//! A [`Namespace`] is a mutable mapping layered over an immutable builtin
//! table, with an undo stack so `\begingroup`/`{` can open a group whose
//! local definitions vanish at the matching `\endgroup`/`}`.

use core::cell::RefMut;

use rapidhash::{RapidHashMap, RapidHashSet};

use crate::types::{ParseError, ParseErrorKind};

/// The hash map used for every runtime table in the crate.
pub type KeyMap<K, V> = RapidHashMap<K, V>;
/// The hash set companion.
pub type KeySet<K> = RapidHashSet<K>;
/// String-keyed mapping.
pub type Mapping<V> = KeyMap<String, V>;

/// Grouped definitions: `get`/local `set` are O(1); global `set` is O(depth).
#[derive(Debug)]
pub struct Namespace<'a, V: Clone + 'static> {
    /// The mutable table. Borrowed from the settings record so user macros
    /// defined with `\gdef` survive the parse when `global_group` is set.
    current: RefMut<'a, Mapping<V>>,
    /// Immutable builtin definitions consulted after `current`.
    builtins: &'static phf::Map<&'static str, V>,
    /// Per-group undo maps; `None` records a deletion to restore.
    undef_stack: Vec<KeyMap<String, Option<V>>>,
}

impl<'a, V: Clone> Namespace<'a, V> {
    /// Create a namespace over `builtins` with `global` as the mutable layer.
    #[must_use]
    pub const fn new(
        builtins: &'static phf::Map<&'static str, V>,
        global: RefMut<'a, Mapping<V>>,
    ) -> Self {
        Self {
            current: global,
            builtins,
            undef_stack: Vec::new(),
        }
    }

    /// Open a nested group.
    pub fn begin_group(&mut self) {
        self.undef_stack.push(KeyMap::default());
    }

    /// Play back one group's undo map onto the current table.
    fn unwind(&mut self, undefs: KeyMap<String, Option<V>>) {
        for (name, previous) in undefs {
            match previous {
                Some(value) => self.current.insert(name, value),
                None => self.current.remove(&name),
            };
        }
    }

    /// Close the innermost group, restoring pre-group values.
    pub fn end_group(&mut self) -> Result<(), ParseError> {
        match self.undef_stack.pop() {
            Some(undefs) => {
                self.unwind(undefs);
                Ok(())
            }
            None => Err(ParseError::new(ParseErrorKind::UnbalancedNamespaceDestruction)),
        }
    }

    /// Close every open group. Returns how many were closed.
    pub fn end_groups(&mut self) -> usize {
        let depth = self.undef_stack.len();
        while let Some(undefs) = self.undef_stack.pop() {
            self.unwind(undefs);
        }
        depth
    }

    /// Whether `name` has any definition, builtin or current.
    #[must_use]
    pub fn has(&self, name: &str) -> bool {
        self.current.contains_key(name) || self.builtins.contains_key(name)
    }

    /// Look up `name`, preferring current definitions over builtins.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&V> {
        self.current.get(name).or_else(|| self.builtins.get(name))
    }

    /// Define `name` locally or globally. `None` deletes.
    pub fn set(&mut self, name: &str, value: Option<V>, global: bool) {
        if global {
            // A global set wins at every level: cancel the pending undos for
            // this name, then seed the innermost group with the new value so
            // the definition survives each pop.
            for level in &mut self.undef_stack {
                level.remove(name);
            }
            if let Some(innermost) = self.undef_stack.last_mut() {
                innermost.insert(name.to_owned(), value.clone());
            }
        } else {
            // The first local write in a group records the restore value;
            // later writes keep the older snapshot.
            let snapshot = self.current.get(name).cloned();
            if let Some(innermost) = self.undef_stack.last_mut() {
                innermost.entry(name.to_owned()).or_insert(snapshot);
            }
        }

        match value {
            Some(value) => self.current.insert(name.to_owned(), value),
            None => self.current.remove(name),
        };
    }
}
