use crate::attr::{ContainerAttr, MemberAttr};
use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Error, Fields, Ident, Type, Visibility};

///
/// Member
///

struct Member<'a> {
    ident: &'a Ident,
    ty: &'a Type,
    public: bool,
    attr: MemberAttr,
}

// derive_record
pub fn derive_record(input: TokenStream) -> TokenStream {
    let input: DeriveInput = match syn::parse2(input) {
        Ok(input) => input,
        Err(err) => return err.to_compile_error(),
    };

    match expand(&input) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error(),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let ident = &input.ident;

    if !input.generics.params.is_empty() {
        return Err(Error::new_spanned(
            &input.generics,
            "Record cannot be derived for generic types",
        ));
    }

    let Data::Struct(data) = &input.data else {
        return Err(Error::new_spanned(
            ident,
            "Record can only be derived for structs with named fields",
        ));
    };
    let Fields::Named(named) = &data.fields else {
        return Err(Error::new_spanned(
            &data.fields,
            "Record can only be derived for structs with named fields",
        ));
    };

    let container = ContainerAttr::parse(&input.attrs)?;

    let mut members = Vec::new();
    for field in &named.named {
        let Some(field_ident) = field.ident.as_ref() else {
            continue;
        };
        let attr = MemberAttr::parse(&field.attrs)?;
        if attr.skip {
            continue;
        }

        members.push(Member {
            ident: field_ident,
            ty: &field.ty,
            public: matches!(field.vis, Visibility::Public(_)),
            attr,
        });
    }

    let members_impl = members_impl(ident, &members);
    let record_impl = record_impl(ident, &members);
    let table_impl = container.table.map(|table| {
        quote! {
            impl ::rowmap::traits::Table for #ident {
                fn table_name(&self) -> &str {
                    #table
                }
            }
        }
    });

    Ok(quote! {
        #members_impl
        #record_impl
        #table_impl

        impl ::rowmap::traits::FieldValue for #ident {
            fn native_type() -> ::rowmap::model::NativeType {
                ::rowmap::model::NativeType::record(<Self as ::rowmap::traits::Record>::model)
            }

            fn to_native(&self) -> ::rowmap::value::NativeValue {
                ::rowmap::value::NativeValue::Null
            }

            fn from_native(
                value: ::rowmap::value::NativeValue,
            ) -> ::core::result::Result<Self, ::rowmap::value::NativeValue> {
                ::core::result::Result::Err(value)
            }

            fn assign_native(
                &mut self,
                value: ::rowmap::value::NativeValue,
            ) -> ::core::result::Result<(), ::rowmap::value::NativeValue> {
                ::core::result::Result::Err(value)
            }

            fn as_members(&self) -> ::core::option::Option<&dyn ::rowmap::traits::Members> {
                ::core::option::Option::Some(self)
            }

            fn as_members_mut(
                &mut self,
            ) -> ::core::option::Option<&mut dyn ::rowmap::traits::Members> {
                ::core::option::Option::Some(self)
            }
        }

        impl ::rowmap::traits::SchemaSource for #ident {
            fn source_type() -> ::rowmap::model::NativeType {
                <Self as ::rowmap::traits::FieldValue>::native_type()
            }
        }
    })
}

fn members_impl(ident: &Ident, members: &[Member]) -> TokenStream {
    let by_ref = members.iter().enumerate().map(|(index, m)| {
        let field = m.ident;
        quote! {
            #index => ::core::option::Option::Some(
                &self.#field as &dyn ::rowmap::traits::FieldValue
            ),
        }
    });
    let by_mut = members.iter().enumerate().map(|(index, m)| {
        let field = m.ident;
        quote! {
            #index => ::core::option::Option::Some(
                &mut self.#field as &mut dyn ::rowmap::traits::FieldValue
            ),
        }
    });

    quote! {
        impl ::rowmap::traits::Members for #ident {
            fn member(
                &self,
                index: usize,
            ) -> ::core::option::Option<&dyn ::rowmap::traits::FieldValue> {
                match index {
                    #(#by_ref)*
                    _ => ::core::option::Option::None,
                }
            }

            fn member_mut(
                &mut self,
                index: usize,
            ) -> ::core::option::Option<&mut dyn ::rowmap::traits::FieldValue> {
                match index {
                    #(#by_mut)*
                    _ => ::core::option::Option::None,
                }
            }
        }
    }
}

fn record_impl(ident: &Ident, members: &[Member]) -> TokenStream {
    let name = ident.to_string();
    let models = members.iter().map(|m| {
        let member_name = m.ident.to_string();
        let ty = m.ty;
        let visibility = if m.public {
            quote!(::rowmap::model::Visibility::Public)
        } else {
            quote!(::rowmap::model::Visibility::Restricted)
        };
        let annotation = annotation(&m.attr);

        quote! {
            ::rowmap::model::MemberModel {
                name: #member_name,
                visibility: #visibility,
                annotation: #annotation,
                native_type: <#ty as ::rowmap::traits::FieldValue>::native_type,
            }
        }
    });

    quote! {
        impl ::rowmap::traits::Record for #ident {
            fn model() -> &'static ::rowmap::model::RecordModel {
                static MODEL: ::rowmap::model::RecordModel = ::rowmap::model::RecordModel {
                    path: ::core::concat!(::core::module_path!(), "::", #name),
                    type_id: ::core::any::TypeId::of::<#ident>,
                    members: &[#(#models),*],
                };

                &MODEL
            }
        }
    }
}

fn annotation(attr: &MemberAttr) -> TokenStream {
    if let Some(tag) = &attr.tag {
        return quote!(::rowmap::model::Annotation::Tag(#tag));
    }
    if !attr.is_structured() {
        return quote!(::rowmap::model::Annotation::None);
    }

    let column = attr.column.as_ref().map_or_else(
        || quote!(::core::option::Option::None),
        |c| quote!(::core::option::Option::Some(#c)),
    );
    let sort = attr.sort.map_or_else(
        || quote!(::core::option::Option::None),
        |s| quote!(::core::option::Option::Some(#s)),
    );
    let primary_key = attr.primary_key;
    let auto_increment = attr.auto_increment;
    let statement = attr.statement;

    quote! {
        ::rowmap::model::Annotation::Attr(::rowmap::model::FieldAttr {
            column: #column,
            primary_key: #primary_key,
            auto_increment: #auto_increment,
            statement: #statement,
            sort: #sort,
        })
    }
}
