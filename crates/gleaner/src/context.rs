/// Ordered chain of enclosing archive base names, outermost first.
///
/// Each recursion level receives its own extended copy; sibling subtrees
/// never observe each other's extensions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PathContext(Vec<String>);

impl PathContext {
    /// Base name of the outermost enclosing archive, if any.
    pub fn outermost(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    /// A new context with `name` appended; the receiver is left untouched.
    pub fn extended(&self, name: String) -> Self {
        let mut names = self.0.clone();
        names.push(name);
        Self(names)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn depth(&self) -> usize {
        self.0.len()
    }
}
