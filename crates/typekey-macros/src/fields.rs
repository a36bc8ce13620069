use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Ident, LitInt};

pub(crate) fn expand(input: TokenStream) -> syn::Result<TokenStream> {
    let max: LitInt = syn::parse2(input)?;
    let max: usize = max.base10_parse()?;
    let mut output = TokenStream::new();
    for arity in 0..=max {
        output.extend(tuple_impl(arity));
        output.extend(slot_impls(arity));
    }
    Ok(output)
}

fn type_params(arity: usize) -> Vec<Ident> {
    (0..arity).map(|i| format_ident!("T{}", i)).collect()
}

fn generics(params: &[Ident]) -> TokenStream {
    if params.is_empty() {
        TokenStream::new()
    } else {
        quote!(<#(#params),*>)
    }
}

// (T0, T1) -> Cons<T0, Cons<T1, Nil>>, with the matching value expression.
fn tuple_impl(arity: usize) -> TokenStream {
    let params = type_params(arity);
    let generics = generics(&params);
    let list_type = params
        .iter()
        .rev()
        .fold(quote!(crate::list::Nil), |tail, param| {
            quote!(crate::list::Cons<#param, #tail>)
        });
    let list_value = (0..arity)
        .rev()
        .fold(quote!(crate::list::Nil), |tail, position| {
            let index = syn::Index::from(position);
            quote!(crate::list::Cons(self.#index, #tail))
        });
    quote! {
        impl #generics crate::list::Tuple for (#(#params,)*) {
            type AsList = #list_type;

            fn into_list(self) -> Self::AsList {
                #list_value
            }
        }
    }
}

// One Slot impl per position, indexed Z, S<Z>, S<S<Z>>, ...
fn slot_impls(arity: usize) -> TokenStream {
    let params = type_params(arity);
    let generics = generics(&params);
    let mut output = TokenStream::new();
    let mut index_type = quote!(crate::list::Z);
    for (position, field) in params.iter().enumerate() {
        let index = syn::Index::from(position);
        output.extend(quote! {
            impl #generics crate::Slot<#field, #index_type> for crate::Keyed<(#(#params,)*)> {
                fn slot(&self) -> &#field {
                    &self.fields.#index
                }

                fn slot_mut(&mut self) -> &mut #field {
                    &mut self.fields.#index
                }
            }
        });
        index_type = quote!(crate::list::S<#index_type>);
    }
    output
}
