pub mod fragment;
pub mod view;

pub use fragment::{parse_fragment, product_fragment, FragmentTarget, FRAGMENT_PREFIX};
pub use view::{DetailView, OpenProduct};
