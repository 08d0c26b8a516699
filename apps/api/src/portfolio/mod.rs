// Portfolio sections: experience, projects, education and skills.
// Read-only; rows are reshaped for display on the way out.

pub mod handlers;
