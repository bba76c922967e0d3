use syn::{Attribute, LitInt, LitStr, Token, meta::ParseNestedMeta};

///
/// ContainerAttr
///

#[derive(Default)]
pub struct ContainerAttr {
    pub table: Option<LitStr>,
}

impl ContainerAttr {
    pub fn parse(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut out = Self::default();
        for attr in attrs.iter().filter(|a| a.path().is_ident("rowmap")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("table") {
                    out.table = Some(meta.value()?.parse()?);
                } else {
                    skip_unknown(&meta)?;
                }

                Ok(())
            })?;
        }

        Ok(out)
    }
}

///
/// MemberAttr
///

#[derive(Default)]
pub struct MemberAttr {
    pub column: Option<LitStr>,
    pub primary_key: bool,
    pub auto_increment: bool,
    pub statement: bool,
    pub sort: Option<i32>,
    pub tag: Option<LitStr>,
    pub skip: bool,
}

impl MemberAttr {
    pub fn parse(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut out = Self::default();
        for attr in attrs.iter().filter(|a| a.path().is_ident("rowmap")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("column") {
                    out.column = Some(meta.value()?.parse()?);
                } else if meta.path.is_ident("primary_key") {
                    out.primary_key = true;
                } else if meta.path.is_ident("auto_increment") {
                    out.auto_increment = true;
                } else if meta.path.is_ident("statement") {
                    out.statement = true;
                } else if meta.path.is_ident("sort") {
                    out.sort = Some(parse_sort(&meta)?);
                } else if meta.path.is_ident("tag") {
                    out.tag = Some(meta.value()?.parse()?);
                } else if meta.path.is_ident("skip") {
                    out.skip = true;
                } else {
                    skip_unknown(&meta)?;
                }

                Ok(())
            })?;

            if out.tag.is_some() && out.is_structured() {
                return Err(syn::Error::new_spanned(
                    attr,
                    "`tag` cannot be combined with structured rowmap options",
                ));
            }
        }

        Ok(out)
    }

    pub const fn is_structured(&self) -> bool {
        self.column.is_some()
            || self.primary_key
            || self.auto_increment
            || self.statement
            || self.sort.is_some()
    }
}

// `sort = -1` arrives as a minus token followed by an integer literal.
fn parse_sort(meta: &ParseNestedMeta) -> syn::Result<i32> {
    let input = meta.value()?;
    let negative = input.parse::<Option<Token![-]>>()?.is_some();
    let lit: LitInt = input.parse()?;
    let n: i32 = lit.base10_parse()?;

    Ok(if negative { -n } else { n })
}

// Unknown keys are ignored, whatever shape their value has.
fn skip_unknown(meta: &ParseNestedMeta) -> syn::Result<()> {
    if meta.input.peek(Token![=]) {
        let _: syn::Expr = meta.value()?.parse()?;
    } else if meta.input.peek(syn::token::Paren) {
        let content;
        syn::parenthesized!(content in meta.input);
        let _: proc_macro2::TokenStream = content.parse()?;
    }

    Ok(())
}
