//! Typed validator-expression tree.
//!
//! Emitters build [`ZodExpr`] values; a [`Printer`] renders them to source
//! text. Keeping the tree separate from the rendering means a different
//! validator library only needs a new printer, not new emitters.

/// Scalar type tags with a fixed validator mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarType {
    String,
    Boolean,
    Int,
    BigInt,
    Float,
    Decimal,
    DateTime,
    Json,
    Bytes,
}

impl ScalarType {
    /// Map a document type tag. Unknown tags have no scalar mapping and
    /// fall back to [`ZodExpr::Any`] in the type mapper.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "String" => Some(Self::String),
            "Boolean" => Some(Self::Boolean),
            "Int" => Some(Self::Int),
            "BigInt" => Some(Self::BigInt),
            "Float" => Some(Self::Float),
            "Decimal" => Some(Self::Decimal),
            "DateTime" => Some(Self::DateTime),
            "Json" => Some(Self::Json),
            "Bytes" => Some(Self::Bytes),
            _ => None,
        }
    }
}

/// One validator expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ZodExpr {
    Scalar(ScalarType),
    /// Accept-anything fallback for unmapped type tags.
    Any,
    /// Validate against a named enum constant.
    NativeEnum(String),
    /// Reference to another generated schema symbol.
    Ref(String),
    Array(Box<ZodExpr>),
    Nullable(Box<ZodExpr>),
    Optional(Box<ZodExpr>),
}

impl ZodExpr {
    pub fn array(inner: Self) -> Self {
        Self::Array(Box::new(inner))
    }

    pub fn nullable(inner: Self) -> Self {
        Self::Nullable(Box::new(inner))
    }

    pub fn optional(inner: Self) -> Self {
        Self::Optional(Box::new(inner))
    }
}

/// Renders expression trees for one validator library.
pub trait Printer {
    fn print(&self, expr: &ZodExpr) -> String;
}

/// The Zod printer.
pub struct ZodPrinter;

impl Printer for ZodPrinter {
    fn print(&self, expr: &ZodExpr) -> String {
        match expr {
            ZodExpr::Scalar(scalar) => scalar_expr(*scalar).to_string(),
            ZodExpr::Any => "z.any()".to_string(),
            ZodExpr::NativeEnum(name) => format!("z.nativeEnum({})", name),
            ZodExpr::Ref(symbol) => symbol.clone(),
            ZodExpr::Array(inner) => format!("z.array({})", self.print(inner)),
            ZodExpr::Nullable(inner) => format!("{}.nullable()", self.print(inner)),
            ZodExpr::Optional(inner) => format!("{}.optional()", self.print(inner)),
        }
    }
}

fn scalar_expr(scalar: ScalarType) -> &'static str {
    match scalar {
        ScalarType::String => "z.string()",
        ScalarType::Boolean => "z.boolean()",
        ScalarType::Int => "z.number().int()",
        ScalarType::BigInt => "z.bigint()",
        ScalarType::Float | ScalarType::Decimal => "z.number()",
        ScalarType::DateTime => "z.date()",
        ScalarType::Json => "z.any()",
        ScalarType::Bytes => "z.instanceof(Buffer)",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn print(expr: &ZodExpr) -> String {
        ZodPrinter.print(expr)
    }

    #[test]
    fn scalar_table() {
        assert_eq!(print(&ZodExpr::Scalar(ScalarType::String)), "z.string()");
        assert_eq!(print(&ZodExpr::Scalar(ScalarType::Int)), "z.number().int()");
        assert_eq!(print(&ZodExpr::Scalar(ScalarType::BigInt)), "z.bigint()");
        assert_eq!(print(&ZodExpr::Scalar(ScalarType::Decimal)), "z.number()");
        assert_eq!(print(&ZodExpr::Scalar(ScalarType::DateTime)), "z.date()");
        assert_eq!(
            print(&ZodExpr::Scalar(ScalarType::Bytes)),
            "z.instanceof(Buffer)"
        );
    }

    #[test]
    fn unknown_tag_has_no_scalar() {
        assert_eq!(ScalarType::from_tag("Unsupported"), None);
        assert_eq!(ScalarType::from_tag("DateTime"), Some(ScalarType::DateTime));
    }

    #[test]
    fn wrappers_nest() {
        let expr = ZodExpr::array(ZodExpr::nullable(ZodExpr::Scalar(ScalarType::String)));
        assert_eq!(print(&expr), "z.array(z.string().nullable())");

        let expr = ZodExpr::optional(ZodExpr::array(ZodExpr::Ref("PostDto".to_string())));
        assert_eq!(print(&expr), "z.array(PostDto).optional()");
    }

    #[test]
    fn native_enum() {
        assert_eq!(
            print(&ZodExpr::NativeEnum("Role".to_string())),
            "z.nativeEnum(Role)"
        );
    }
}
