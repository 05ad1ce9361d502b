mod fields;
mod footer;

pub(crate) use fields::render_fields;
pub(crate) use footer::render_footer;
