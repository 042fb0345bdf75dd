use jointkit_geometry::Constraint;
use serde::Serialize;

use crate::boxes::FacePath;
use crate::error::CamToolResult;

#[derive(Serialize)]
struct BoxDocument<'a> {
    user_parameters: &'a [Constraint],
    faces: &'a [FacePath],
}

/// Pretty JSON with the user parameters and every face outline
pub fn faces_to_json(faces: &[FacePath], user_parameters: &[Constraint]) -> CamToolResult<String> {
    let doc = BoxDocument {
        user_parameters,
        faces,
    };
    Ok(serde_json::to_string_pretty(&doc)?)
}
