//! Route-to-template mapping.

/// Every page the site can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Login,
    Register,
    ForgotPassword,
    VerifyOtp,
    Profile,
    Index,
    About,
    Blog,
    BlogSingle,
    Cart,
    Checkout,
    Contact,
    Menu,
    Privacy,
    ProductSingle,
    Services,
    Shop,
    Error,
}

/// Shared page chrome every view extends.
#[cfg(test)]
const LAYOUT: &str = "layout.html";

macro_rules! embedded {
    ($name:literal) => {
        ($name, include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/", $name)))
    };
}

/// Templates compiled into the binary, keyed by template name.
pub(crate) const EMBEDDED: &[(&str, &str)] = &[
    embedded!("layout.html"),
    embedded!("auth/login.html"),
    embedded!("auth/register.html"),
    embedded!("auth/forgot-password.html"),
    embedded!("auth/verify-otp.html"),
    embedded!("auth/profile.html"),
    embedded!("home/index.html"),
    embedded!("home/about.html"),
    embedded!("home/blog.html"),
    embedded!("home/blog-single.html"),
    embedded!("home/cart.html"),
    embedded!("home/checkout.html"),
    embedded!("home/contact.html"),
    embedded!("home/menu.html"),
    embedded!("home/privacy.html"),
    embedded!("home/product-single.html"),
    embedded!("home/services.html"),
    embedded!("home/shop.html"),
    embedded!("home/error.html"),
];

impl View {
    pub const ALL: [View; 18] = [
        View::Login,
        View::Register,
        View::ForgotPassword,
        View::VerifyOtp,
        View::Profile,
        View::Index,
        View::About,
        View::Blog,
        View::BlogSingle,
        View::Cart,
        View::Checkout,
        View::Contact,
        View::Menu,
        View::Privacy,
        View::ProductSingle,
        View::Services,
        View::Shop,
        View::Error,
    ];

    /// Template name, relative to the template root.
    pub const fn template_name(self) -> &'static str {
        match self {
            View::Login => "auth/login.html",
            View::Register => "auth/register.html",
            View::ForgotPassword => "auth/forgot-password.html",
            View::VerifyOtp => "auth/verify-otp.html",
            View::Profile => "auth/profile.html",
            View::Index => "home/index.html",
            View::About => "home/about.html",
            View::Blog => "home/blog.html",
            View::BlogSingle => "home/blog-single.html",
            View::Cart => "home/cart.html",
            View::Checkout => "home/checkout.html",
            View::Contact => "home/contact.html",
            View::Menu => "home/menu.html",
            View::Privacy => "home/privacy.html",
            View::ProductSingle => "home/product-single.html",
            View::Services => "home/services.html",
            View::Shop => "home/shop.html",
            View::Error => "home/error.html",
        }
    }
}
