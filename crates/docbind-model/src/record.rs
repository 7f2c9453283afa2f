use crate::schema::{FieldSchema, SheetDescriptor};
use crate::value::FieldValue;

type SetFn<T> = Box<dyn Fn(&mut T, FieldValue) + Send + Sync>;
type GetFn<T> = Box<dyn Fn(&T) -> FieldValue + Send + Sync>;

/// One field descriptor plus its typed accessors on `T`.
///
/// The accessor table replaces runtime reflection: it is built once per
/// record type and reused across every row of an import.
pub struct FieldBinding<T> {
    pub spec: FieldSchema,
    set: SetFn<T>,
    get: GetFn<T>,
}

impl<T> FieldBinding<T> {
    pub fn new(
        spec: FieldSchema,
        set: impl Fn(&mut T, FieldValue) + Send + Sync + 'static,
        get: impl Fn(&T) -> FieldValue + Send + Sync + 'static,
    ) -> Self {
        Self {
            spec,
            set: Box::new(set),
            get: Box::new(get),
        }
    }

    pub fn assign(&self, record: &mut T, value: FieldValue) {
        (self.set)(record, value);
    }

    pub fn current(&self, record: &T) -> FieldValue {
        (self.get)(record)
    }
}

impl<T> std::fmt::Debug for FieldBinding<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldBinding")
            .field("spec", &self.spec)
            .finish_non_exhaustive()
    }
}

/// Complete binding description for one record type: the sheet region it
/// lives in and the ordered field descriptor table.
#[derive(Debug)]
pub struct RecordSchema<T> {
    pub sheet: SheetDescriptor,
    pub fields: Vec<FieldBinding<T>>,
}

impl<T> RecordSchema<T> {
    pub fn new(sheet: SheetDescriptor) -> Self {
        Self {
            sheet,
            fields: Vec::new(),
        }
    }

    /// Schema for a record type that declares no sheet of its own: default
    /// sheet name, auto-detected bounds, validation enabled.
    pub fn default_sheet() -> Self {
        Self::new(SheetDescriptor::default())
    }

    #[must_use]
    pub fn field(
        mut self,
        spec: FieldSchema,
        set: impl Fn(&mut T, FieldValue) + Send + Sync + 'static,
        get: impl Fn(&T) -> FieldValue + Send + Sync + 'static,
    ) -> Self {
        self.fields.push(FieldBinding::new(spec, set, get));
        self
    }

    /// Find a binding by its header identity, case-insensitively.
    pub fn binding_for(&self, header: &str) -> Option<usize> {
        self.fields
            .iter()
            .position(|binding| binding.spec.binding_name().eq_ignore_ascii_case(header))
    }
}
