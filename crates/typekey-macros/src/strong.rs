use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::parse::{Parse, ParseStream};
use syn::{Attribute, Ident, Token, Type, Visibility};

/// One `vis type Name = Underlying;` line.
struct Declaration {
    attrs: Vec<Attribute>,
    vis: Visibility,
    name: Ident,
    underlying: Type,
}

struct Declarations(Vec<Declaration>);

impl Parse for Declaration {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let attrs = input.call(Attribute::parse_outer)?;
        let vis = input.parse()?;
        input.parse::<Token![type]>()?;
        let name = input.parse()?;
        input.parse::<Token![=]>()?;
        let underlying = input.parse()?;
        input.parse::<Token![;]>()?;
        Ok(Declaration {
            attrs,
            vis,
            name,
            underlying,
        })
    }
}

impl Parse for Declarations {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut declarations = Vec::new();
        while !input.is_empty() {
            declarations.push(input.parse()?);
        }
        Ok(Declarations(declarations))
    }
}

pub(crate) fn expand(input: TokenStream) -> syn::Result<TokenStream> {
    let Declarations(declarations) = syn::parse2(input)?;
    let mut output = TokenStream::new();
    for Declaration {
        attrs,
        vis,
        name,
        underlying,
    } in declarations
    {
        let tag = format_ident!("{}Tag", name);
        let tag_doc = format!(
            "Compile-time marker distinguishing [`{name}`] from every other \
             strong alias of its underlying type."
        );
        output.extend(quote! {
            #(#attrs)*
            #vis type #name = ::typekey::Strong<#underlying, #tag>;

            #[doc = #tag_doc]
            #vis enum #tag {}
        });
    }
    Ok(output)
}
