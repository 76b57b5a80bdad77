//! Field → validator-expression mapping.

use zodgen_model::{Field, FieldKind};

use crate::expr::{ScalarType, ZodExpr};
use crate::naming;

/// Map one field to its validator expression.
///
/// `is_complete` controls relation expansion: in complete mode relation
/// fields become references to the related entity's schema. In base mode
/// the entity builder omits relation fields instead of mapping them, so the
/// flag changes nothing for non-relation fields.
///
/// Rules, applied in order:
/// 1. Base expression from the scalar table; unknown tags fall back to
///    accept-anything.
/// 2. Enum-kind fields validate against the named enum.
/// 3. Optional list → array of nullable entries.
/// 4. Complete + relation + list → optional array of the related schema.
/// 5. Complete + relation + singular → the related schema itself.
/// 6. Optional singular → nullable wrapper around whatever came before.
pub fn map_field(field: &Field, is_complete: bool) -> ZodExpr {
    let mut expr = match ScalarType::from_tag(&field.ty) {
        Some(scalar) => ZodExpr::Scalar(scalar),
        None => ZodExpr::Any,
    };

    if field.kind == FieldKind::Enum {
        expr = ZodExpr::NativeEnum(field.ty.clone());
    }

    if !field.is_required && field.is_list {
        expr = ZodExpr::array(ZodExpr::nullable(expr));
    }

    if is_complete && field.is_relation() && field.is_list {
        expr = ZodExpr::optional(ZodExpr::array(ZodExpr::Ref(naming::dto_symbol(&field.ty))));
    }

    if is_complete && field.is_relation() && !field.is_list {
        expr = ZodExpr::Ref(naming::dto_symbol(&field.ty));
    }

    if !field.is_required && !field.is_list {
        expr = ZodExpr::nullable(expr);
    }

    expr
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::{Printer, ZodPrinter};

    fn field(name: &str, ty: &str) -> Field {
        Field {
            name: name.to_string(),
            ty: ty.to_string(),
            kind: FieldKind::Scalar,
            is_required: true,
            is_list: false,
            relation_name: None,
            documentation: None,
        }
    }

    fn print(field: &Field, is_complete: bool) -> String {
        ZodPrinter.print(&map_field(field, is_complete))
    }

    #[test]
    fn required_scalar_is_bare() {
        assert_eq!(print(&field("id", "Int"), false), "z.number().int()");
        assert_eq!(print(&field("raw", "Bytes"), false), "z.instanceof(Buffer)");
    }

    #[test]
    fn unknown_tag_falls_back_to_any() {
        assert_eq!(print(&field("blob", "Unsupported"), false), "z.any()");
    }

    #[test]
    fn enum_field_validates_against_named_enum() {
        let mut f = field("role", "Role");
        f.kind = FieldKind::Enum;
        assert_eq!(print(&f, false), "z.nativeEnum(Role)");

        f.is_required = false;
        assert_eq!(print(&f, false), "z.nativeEnum(Role).nullable()");
    }

    #[test]
    fn optional_scalar_is_nullable() {
        let mut f = field("name", "String");
        f.is_required = false;
        assert_eq!(print(&f, false), "z.string().nullable()");
    }

    #[test]
    fn optional_list_is_array_of_nullable() {
        let mut f = field("tags", "String");
        f.is_required = false;
        f.is_list = true;
        assert_eq!(print(&f, false), "z.array(z.string().nullable())");
    }

    #[test]
    fn relation_list_in_complete_mode() {
        let mut f = field("posts", "Post");
        f.kind = FieldKind::Object;
        f.is_list = true;
        f.relation_name = Some("UserPosts".to_string());
        assert_eq!(print(&f, true), "z.array(PostDto).optional()");
    }

    #[test]
    fn singular_relation_in_complete_mode() {
        let mut f = field("author", "User");
        f.kind = FieldKind::Object;
        f.relation_name = Some("PostAuthor".to_string());
        assert_eq!(print(&f, true), "UserDto");
    }

    #[test]
    fn optional_singular_relation_is_nullable_reference() {
        let mut f = field("profile", "Profile");
        f.kind = FieldKind::Object;
        f.is_required = false;
        f.relation_name = Some("UserProfile".to_string());
        assert_eq!(print(&f, true), "ProfileDto.nullable()");
    }

    #[test]
    fn mapping_is_idempotent() {
        let mut f = field("name", "String");
        f.is_required = false;
        let first = map_field(&f, true);
        let second = map_field(&f, true);
        assert_eq!(first, second);
    }
}
