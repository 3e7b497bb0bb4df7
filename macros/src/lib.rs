use proc_macro2::TokenStream;
use quote::{quote, quote_spanned};
use syn::spanned::Spanned;
use syn::{parse_macro_input, parse_quote, Data, DeriveInput, GenericParam, Generics};

/// Derives `outcome::ErrorInitializing` for a newtype wrapper around another
/// error-initializing type.
///
/// ```ignore
/// #[derive(Debug, ErrorInitializing)]
/// struct ParseFailure(anyhow::Error);
/// ```
#[proc_macro_derive(ErrorInitializing)]
pub fn derive_error_initializing(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    // Parse the input tokens into a syntax tree
    let input = parse_macro_input!(input as DeriveInput);

    // Used in the quasi-quotation below as `#name`.
    let name = input.ident;

    // Add a bound `T: ErrorInitializing` to every type parameter T.
    let generics = add_trait_bounds(input.generics);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let call = match call_from_raised(&input.data) {
        Ok(call) => call,
        Err(e) => return proc_macro::TokenStream::from(e.to_compile_error()),
    };

    let expanded = quote! {
        impl #impl_generics ::outcome::ErrorInitializing for #name #ty_generics #where_clause {
            fn from_raised(error: ::outcome::anyhow::Error) -> Self {
                #call
            }
        }
    };

    proc_macro::TokenStream::from(expanded)
}

fn add_trait_bounds(mut generics: Generics) -> Generics {
    for param in &mut generics.params {
        if let GenericParam::Type(ref mut type_param) = *param {
            type_param
                .bounds
                .push(parse_quote!(::outcome::ErrorInitializing));
        }
    }
    generics
}

/// Expands to `Self(<Field as ErrorInitializing>::from_raised(error))` for a
/// single field tuple struct.
fn call_from_raised(data: &Data) -> syn::Result<TokenStream> {
    match *data {
        Data::Struct(ref data) => match data.fields {
            syn::Fields::Unnamed(ref fields) if fields.unnamed.len() == 1 => {
                let field = &fields.unnamed[0];
                let ty = &field.ty;

                Ok(quote_spanned!(field.span() =>
                    Self(<#ty as ::outcome::ErrorInitializing>::from_raised(error))
                ))
            }
            ref fields => Err(syn::Error::new(
                fields.span(),
                "ErrorInitializing can only be derived for a tuple struct with a single field",
            )),
        },
        Data::Enum(ref data) => Err(syn::Error::new(
            data.enum_token.span,
            "ErrorInitializing cannot be derived for enums",
        )),
        Data::Union(ref data) => Err(syn::Error::new(
            data.union_token.span,
            "ErrorInitializing cannot be derived for unions",
        )),
    }
}
