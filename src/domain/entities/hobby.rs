#[derive(Debug, Clone, Copy)]
pub struct Hobby {
    pub name: &'static str,
    pub description: &'static str,
}

pub const HOBBIES: [Hobby; 3] = [
    Hobby {
        name: "Coding",
        description: "Xây dựng project, automations, scripting.",
    },
    Hobby {
        name: "3D Modeling",
        description: "Học cơ bản Blender/SketchUp.",
    },
    Hobby {
        name: "Reading",
        description: "Technical blogs and fiction.",
    },
];
