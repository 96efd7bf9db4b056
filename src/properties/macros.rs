/// Declares a property type from its ordered CZML field list.
///
/// Generates the immutable struct with its getters, a builder whose `build`
/// runs the optional whole-object check, and the encoder impls. Field groups
/// listed in brackets are emitted before the type's own fields.
///
/// ```text
/// czml_property! {
///     /// Docs.
///     pub struct Name / NameBuilder [deletable: Deletable] {
///         "jsonName" => field: Type,
///     }
///     defaults = fn_taking_and_returning_the_builder;
///     validate = fn_taking_the_built_value;
/// }
/// ```
macro_rules! czml_property {
    (
        $(#[$meta:meta])*
        pub struct $name:ident / $builder:ident
            $([ $($group:ident : $group_ty:ident),+ $(,)? ])?
        {
            $(
                $(#[$field_meta:meta])*
                $json:literal => $field:ident : $ty:ty
            ),* $(,)?
        }
        $(defaults = $defaults:path;)?
        $(validate = $validate:path;)?
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name {
            $($($group: $crate::common::$group_ty,)+)?
            $($field: Option<$ty>,)*
        }

        impl $name {
            #[doc = concat!("Start building a [`", stringify!($name), "`].")]
            pub fn builder() -> $builder {
                let builder = $builder::default();
                $(let builder = $defaults(builder);)?
                builder
            }

            $($(
                #[doc = concat!("The [`", stringify!($group_ty), "`] field group.")]
                pub fn $group(&self) -> &$crate::common::$group_ty {
                    &self.$group
                }
            )+)?

            $(
                $(#[$field_meta])*
                pub fn $field(&self) -> Option<&$ty> {
                    self.$field.as_ref()
                }
            )*
        }

        #[doc = concat!("Builder for [`", stringify!($name), "`].")]
        #[derive(Debug, Clone, Default)]
        pub struct $builder {
            $($($group: $crate::common::$group_ty,)+)?
            $($field: Option<$ty>,)*
        }

        impl $builder {
            $(
                $(#[$field_meta])*
                pub fn $field(mut self, value: impl Into<$ty>) -> Self {
                    self.$field = Some(value.into());
                    self
                }
            )*

            #[doc = concat!("Check the whole object and build the [`", stringify!($name), "`].")]
            pub fn build(self) -> $crate::error::CzmlResult<$name> {
                let property = $name {
                    $($($group: self.$group,)+)?
                    $($field: self.$field,)*
                };
                $($validate(&property)?;)?
                Ok(property)
            }
        }

        $($(
            impl $crate::common::WithFields<$crate::common::$group_ty> for $builder {
                fn fields_mut(&mut self) -> &mut $crate::common::$group_ty {
                    &mut self.$group
                }
            }
        )+)?

        impl $crate::encoder::CzmlObject for $name {
            fn write_fields<W: $crate::encoder::FieldWriter>(
                &self,
                writer: &mut W,
            ) -> Result<(), W::Error> {
                $($($crate::common::FieldGroup::write_group(&self.$group, writer)?;)+)?
                $(writer.field($json, self.$field.as_ref())?;)*
                Ok(())
            }

            fn is_deleted(&self) -> bool {
                false $($(|| $crate::common::FieldGroup::is_deleted(&self.$group))+)?
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                $crate::encoder::serialize_object(self, serializer)
            }
        }

        impl $crate::encoder::IntervalContent for $name {
            fn write_content<W: $crate::encoder::FieldWriter>(
                &self,
                writer: &mut W,
            ) -> Result<(), W::Error> {
                $crate::encoder::write_object(self, writer)
            }
        }
    };
}
