use proc_macro::TokenStream;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream}, parse_macro_input, Data, DataStruct, DeriveInput, Fields, Ident, LitStr, Token, Type, TypePath
};

struct NodeAttribute {
    crate_path: syn::Path,
}

/// Parses the attribute in the format: `crate_path = "path::to::crate"`.
impl Parse for NodeAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let key: Ident = input.parse()?;
        if key != "crate_path" {
            return Err(syn::Error::new(key.span(), "expected attribute `crate_path`"));
        }

        let _: Token![=] = input.parse()?;
        let value: LitStr = input.parse()?;
        let path: syn::Path = value.parse()?;

        Ok(NodeAttribute { crate_path: path })
    }
}

/// Derive macro for singly linked list nodes.
///
/// The struct must have a `link: SingleLink` field and may have a `data`
/// field, in which case `NodeWithData` is implemented as well.
#[proc_macro_derive(Node, attributes(node))]
pub fn node_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let mut crate_path = quote! { ::list_intersection };

    for attr in &input.attrs {
        if attr.path().is_ident("node") {
            match attr.parse_args::<NodeAttribute>() {
                Ok(node_attr) => {
                    let path = node_attr.crate_path;
                    crate_path = quote! { #path };
                    break;
                }
                Err(e) => return e.to_compile_error().into(),
            }
        }
    }

    let intrusive_path = quote! { #crate_path::linked_list::intrusive };

    let mut link_field = None;
    let mut data_field = None;

    let Data::Struct(DataStruct {
        fields: Fields::Named(ref fields),
        ..
    }) = input.data
    else {
        return syn::Error::new_spanned(
            input,
            "Node derive macro only supports structs with named fields",
        )
        .to_compile_error()
        .into();
    };

    for field in fields.named.iter() {
        if let Some(ident) = &field.ident {
            match ident.to_string().as_str() {
                "link" => link_field = Some(field.clone()),
                "data" => data_field = Some(field.clone()),
                _ => {
                    return syn::Error::new_spanned(
                        ident,
                        "Unexpected field name: expected 'link' or 'data'",
                    )
                    .to_compile_error()
                    .into();
                }
            }
        }
    }

    let Some(link_field) = link_field else {
        return syn::Error::new_spanned(struct_name, "Struct must have a field named 'link'")
            .to_compile_error()
            .into();
    };
    let link_type = &link_field.ty;

    let link_ident = match link_type {
        Type::Path(TypePath { path, .. }) => path.segments.last().map(|s| s.ident.clone()),
        _ => None,
    };
    if !link_ident.is_some_and(|ident| ident == "SingleLink") {
        return syn::Error::new_spanned(link_type, "Field 'link' must be a 'SingleLink'")
            .to_compile_error()
            .into();
    }

    // The link stores pointers to the whole node, cast through `SingleLink`.
    let link_impl = quote! {
        impl #impl_generics #intrusive_path::traits::Link for #struct_name #ty_generics #where_clause {
            type Target = Self;

            #[inline]
            fn next(&self) -> Option<::core::ptr::NonNull<Self::Target>> {
                <#link_type as #intrusive_path::traits::Link>::next(&self.link).map(|n| n.cast())
            }

            #[inline]
            fn set_next(&mut self, next: Option<::core::ptr::NonNull<Self::Target>>) {
                <#link_type as #intrusive_path::traits::Link>::set_next(
                    &mut self.link,
                    next.map(|n| n.cast()),
                );
            }
        }

        impl #impl_generics #intrusive_path::traits::Node for #struct_name #ty_generics #where_clause {
            #[inline]
            fn append_to<L>(&mut self, list: &mut L)
            where
                L: #intrusive_path::traits::List<Target = Self>,
            {
                <Self as #intrusive_path::traits::Link>::set_next(self, list.head());
                list.set_head(Some(::core::ptr::NonNull::from(self)));
            }
        }
    };

    let data_impl = if let Some(data_field) = data_field {
        let data_type = &data_field.ty;
        quote! {
            impl #impl_generics #intrusive_path::traits::NodeWithData for #struct_name #ty_generics #where_clause {
                type Data = #data_type;

                #[inline]
                fn data(&self) -> &Self::Data {
                    &self.data
                }

                #[inline]
                fn data_mut(&mut self) -> &mut Self::Data {
                    &mut self.data
                }
            }
        }
    } else {
        quote! {}
    };

    let expanded = quote! {
        #link_impl
        #data_impl
    };

    TokenStream::from(expanded)
}
