use bstr::ByteSlice;

pub const DIRECTIVE_PREFIX: u8 = b':';
pub const SETVAR_PREFIX: &[u8] = b":setvar ";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LineKind {
    /// Plain SQL, blank lines included.
    Content,
    /// Any `:` line other than `:setvar`, dropped without looking at it.
    Directive,
    SetVar,
}

pub fn classify(line: &[u8]) -> LineKind {
    if !line.starts_with(&[DIRECTIVE_PREFIX]) {
        return LineKind::Content;
    }

    if !line.starts_with(SETVAR_PREFIX) {
        return LineKind::Directive;
    }

    LineKind::SetVar
}

/// A parsed `:setvar <name> <value>` line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetVar<'a> {
    pub name: &'a [u8],
    pub value: &'a [u8],
}

impl<'a> SetVar<'a> {
    /// Never fails: a missing name or value becomes empty and surrounding `"`
    /// are trimmed off the value without any pairing check.
    pub fn parse(line: &'a [u8]) -> Self {
        // a bare `:setvar ` loses its space to the trim and has nothing left
        let rest = line.trim().strip_prefix(SETVAR_PREFIX).unwrap_or_default();

        let (name, raw_value) = rest.split_once_str(" ").unwrap_or((rest, &b""[..]));
        Self {
            name,
            value: raw_value.trim_with(|c| c == '"'),
        }
    }

    /// The `$(name)` form looked up in content lines.
    pub fn token(&self) -> Vec<u8> {
        [&b"$("[..], self.name, &b")"[..]].concat()
    }
}
