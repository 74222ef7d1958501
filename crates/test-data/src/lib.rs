pub struct TestModel {
    pub obj: &'static [u8],
    pub mtl: Option<&'static [u8]>,
    /// Triangles expected after conversion.
    pub triangle_count: usize,
    /// Total surface area of the faces that convert successfully.
    pub area: f32,
}

pub const OBJ_SQUARE: TestModel = TestModel {
    obj: include_bytes!("../../../res/square/square.obj"),
    mtl: None,
    triangle_count: 2,
    area: 1.0,
};

pub const OBJ_SQUARE_CW: TestModel = TestModel {
    obj: include_bytes!("../../../res/square-cw/square-cw.obj"),
    mtl: None,
    triangle_count: 2,
    area: 1.0,
};

pub const OBJ_TRIANGLE_CW: TestModel = TestModel {
    obj: include_bytes!("../../../res/triangle-cw/triangle-cw.obj"),
    mtl: None,
    triangle_count: 1,
    area: 0.5,
};

pub const OBJ_BAD_INDEX: TestModel = TestModel {
    obj: include_bytes!("../../../res/bad-index/bad-index.obj"),
    mtl: None,
    triangle_count: 2,
    area: 1.0,
};

pub const OBJ_CONCAVE: TestModel = TestModel {
    obj: include_bytes!("../../../res/concave/concave.obj"),
    mtl: None,
    triangle_count: 4,
    area: 3.0,
};

pub const OBJ_HEXAGON: TestModel = TestModel {
    obj: include_bytes!("../../../res/hexagon/hexagon.obj"),
    mtl: None,
    triangle_count: 4,
    area: 2.598_076,
};

pub const OBJ_CUBE: TestModel = TestModel {
    obj: include_bytes!("../../../res/cube/cube.obj"),
    mtl: Some(include_bytes!("../../../res/cube/cube.mtl")),
    triangle_count: 12,
    area: 2400.0,
};
