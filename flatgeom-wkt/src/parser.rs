use flatgeom::{
    Geometry, GeometryCollection, GeometryType, Layout, LineString, MultiLineString, MultiPoint,
    MultiPolygon, Point, Polygon,
};

use crate::error::{SyntaxError, WktError, WktResult};
use crate::lexer::Lexer;
use crate::token::{Token, TokenKind};

const HINT_POINT_MIN_COORDS: &str = "each point needs at least 2 coords";
const HINT_POINT_MAX_COORDS: &str = "each point can have at most 4 coords";
const HINT_LINESTRING_MIN_POINTS: &str = "minimum number of points is 2";
const HINT_RING_MIN_POINTS: &str = "minimum number of points is 4";
const HINT_RING_NOT_CLOSED: &str = "ensure first and last point are the same";
const HINT_BASE_EMPTY: &str = "EMPTY is XY layout in base geometry type";
const HINT_M_VARIANT: &str =
    "the M variant is required for non-empty XYM geometries in GEOMETRYCOLLECTIONs";

/// Parses a WKT string into a geometry.
///
/// The parser tracks a single layout for the whole string: the first tag
/// suffix or coordinate tuple fixes it, and everything after has to agree.
/// `EMPTY` geometries written without a dimension suffix are XY unless they
/// appear under a suffixed collection, in which case they adopt its layout.
pub fn parse(input: &str) -> WktResult<Geometry> {
    Parser::new(input).parse()
}

struct Parser {
    lexer: Lexer,
    peeked: Option<Token>,
    layout: Layout,
}

impl Parser {
    fn new(input: &str) -> Self {
        Parser {
            lexer: Lexer::new(input),
            peeked: None,
            layout: Layout::None,
        }
    }

    fn parse(mut self) -> WktResult<Geometry> {
        let geom = self.geometry(true)?;
        let tok = self.peek()?;
        if tok.kind != TokenKind::Eof {
            return Err(self.unexpected(&tok, None));
        }
        Ok(geom)
    }

    fn peek(&mut self) -> WktResult<Token> {
        if let Some(tok) = &self.peeked {
            return Ok(tok.clone());
        }
        let tok = self.lexer.next_token()?;
        self.peeked = Some(tok.clone());
        Ok(tok)
    }

    fn advance(&mut self) -> WktResult<Token> {
        match self.peeked.take() {
            Some(tok) => Ok(tok),
            None => self.lexer.next_token(),
        }
    }

    fn error_at(&self, tok: &Token, message: impl Into<String>) -> WktError {
        WktError::Parse(SyntaxError::new(
            message,
            tok.line,
            tok.pos,
            &self.lexer.line_text(tok.line),
        ))
    }

    fn error_with_hint(&self, tok: &Token, message: impl Into<String>, hint: &str) -> WktError {
        WktError::Parse(
            SyntaxError::new(message, tok.line, tok.pos, &self.lexer.line_text(tok.line))
                .with_hint(hint),
        )
    }

    fn unexpected(&self, tok: &Token, expecting: Option<&str>) -> WktError {
        let message = match expecting {
            Some(expecting) => format!("unexpected {}, expecting {}", tok.kind, expecting),
            None => format!("unexpected {}", tok.kind),
        };
        self.error_at(tok, message)
    }

    fn not_xym_error(&self, tok: &Token) -> WktError {
        self.error_with_hint(
            tok,
            "mixed dimensionality, parsed layout is XYM but encountered layout of not XYM",
            HINT_M_VARIANT,
        )
    }

    fn geometry(&mut self, parent_in_base: bool) -> WktResult<Geometry> {
        let tag = self.advance()?;
        let (kind, mut suffix) = match &tag.kind {
            TokenKind::Tag { kind, suffix } => (*kind, *suffix),
            _ => return Err(self.unexpected(&tag, None)),
        };
        if suffix.is_none() {
            if let TokenKind::Suffix(s) = self.peek()?.kind {
                self.advance()?;
                suffix = Some(s);
            }
        }
        if let Some(s) = suffix {
            let declared = s.layout();
            if self.layout == Layout::None {
                self.layout = declared;
            } else if self.layout != declared {
                return Err(self.error_at(
                    &tag,
                    format!(
                        "mixed dimensionality, parsed layout is {} but encountered layout of {}",
                        self.layout, declared
                    ),
                ));
            }
        }

        let in_base = suffix.is_none() && parent_in_base;
        // A base-form tag can never carry XYM coordinates (three ordinates
        // infer XYZ), so it is rejected before its body is parsed.
        let bare_under_m = suffix.is_none()
            && self.layout == Layout::XYM
            && kind != GeometryType::GeometryCollection;
        if bare_under_m && in_base {
            return Err(self.not_xym_error(&tag));
        }

        let body = self.peek()?;
        match body.kind {
            TokenKind::Empty => {
                self.advance()?;
                let layout = self.empty_layout(in_base, &body)?;
                self.empty_geometry(kind, layout)
            }
            TokenKind::LParen => {
                if bare_under_m {
                    return Err(self.not_xym_error(&body));
                }
                self.advance()?;
                match kind {
                    GeometryType::Point => {
                        let coords = self.tuple()?;
                        self.expect_rparen()?;
                        Ok(Point::new(self.layout, coords)?.into())
                    }
                    GeometryType::LineString => {
                        let tuples = self.line_string_tuples()?;
                        Ok(LineString::from_coords(self.layout, tuples)?.into())
                    }
                    GeometryType::Polygon => {
                        let rings = self.polygon_rings()?;
                        Ok(Polygon::from_coords(self.layout, rings)?.into())
                    }
                    GeometryType::MultiPoint => Ok(self.multi_point_body(in_base)?.into()),
                    GeometryType::MultiLineString => {
                        Ok(self.multi_line_string_body(in_base)?.into())
                    }
                    GeometryType::MultiPolygon => Ok(self.multi_polygon_body(in_base)?.into()),
                    GeometryType::GeometryCollection => Ok(self.collection_body(in_base)?.into()),
                }
            }
            _ => Err(self.unexpected(&body, Some("EMPTY or '('"))),
        }
    }

    /// Resolves the layout of an `EMPTY` body or member. In a suffixed
    /// collection chain it adopts the declared layout; in base form it is XY
    /// and must agree with whatever layout the rest of the string fixed.
    fn empty_layout(&mut self, in_base: bool, empty_tok: &Token) -> WktResult<Layout> {
        if !in_base {
            return Ok(self.layout);
        }
        match self.layout {
            Layout::None => {
                self.layout = Layout::XY;
                Ok(Layout::XY)
            }
            Layout::XY => Ok(Layout::XY),
            other => Err(self.error_with_hint(
                empty_tok,
                format!(
                    "mixed dimensionality, parsed layout is {other} but encountered layout of XY"
                ),
                HINT_BASE_EMPTY,
            )),
        }
    }

    fn empty_geometry(&self, kind: GeometryType, layout: Layout) -> WktResult<Geometry> {
        Ok(match kind {
            GeometryType::Point => Point::empty(layout).into(),
            GeometryType::LineString => LineString::empty(layout).into(),
            GeometryType::Polygon => Polygon::empty(layout).into(),
            GeometryType::MultiPoint => MultiPoint::empty(layout).into(),
            GeometryType::MultiLineString => MultiLineString::empty(layout).into(),
            GeometryType::MultiPolygon => MultiPolygon::empty(layout).into(),
            GeometryType::GeometryCollection => {
                let mut gc = GeometryCollection::empty();
                gc.set_layout(layout)?;
                gc.into()
            }
        })
    }

    fn expect_lparen(&mut self) -> WktResult<()> {
        let tok = self.peek()?;
        if tok.kind == TokenKind::LParen {
            self.advance()?;
            Ok(())
        } else {
            Err(self.unexpected(&tok, Some("'('")))
        }
    }

    fn expect_rparen(&mut self) -> WktResult<()> {
        let tok = self.peek()?;
        if tok.kind == TokenKind::RParen {
            self.advance()?;
            Ok(())
        } else {
            Err(self.unexpected(&tok, Some("')'")))
        }
    }

    fn eat_comma(&mut self) -> WktResult<bool> {
        if self.peek()?.kind == TokenKind::Comma {
            self.advance()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Reads one coordinate tuple and validates its width against the
    /// current layout, fixing an undetermined layout from the count. All
    /// errors point at the token that terminated the tuple.
    fn tuple(&mut self) -> WktResult<Vec<f64>> {
        let mut coords = Vec::new();
        while let TokenKind::Num(v) = self.peek()?.kind {
            self.advance()?;
            coords.push(v);
        }
        if coords.is_empty() {
            let tok = self.peek()?;
            return Err(self.unexpected(&tok, Some("NUM")));
        }
        let term = self.peek()?;
        if coords.len() < 2 {
            return Err(self.error_with_hint(&term, "not enough coordinates", HINT_POINT_MIN_COORDS));
        }
        if coords.len() > 4 {
            return Err(self.error_with_hint(&term, "too many coordinates", HINT_POINT_MAX_COORDS));
        }
        match self.layout {
            Layout::None => {
                self.layout = match coords.len() {
                    2 => Layout::XY,
                    3 => Layout::XYZ,
                    _ => Layout::XYZM,
                };
            }
            layout if layout.stride() != coords.len() => {
                return Err(self.error_at(
                    &term,
                    format!(
                        "mixed dimensionality, parsed layout is {layout} so expecting {} coords but got {} coords",
                        layout.stride(),
                        coords.len()
                    ),
                ));
            }
            _ => {}
        }
        Ok(coords)
    }

    fn tuple_list(&mut self) -> WktResult<Vec<Vec<f64>>> {
        let mut tuples = vec![self.tuple()?];
        while self.eat_comma()? {
            tuples.push(self.tuple()?);
        }
        Ok(tuples)
    }

    /// Tuples of a non-empty linestring body, up to and including the
    /// closing parenthesis.
    fn line_string_tuples(&mut self) -> WktResult<Vec<Vec<f64>>> {
        let tuples = self.tuple_list()?;
        let close = self.peek()?;
        if close.kind == TokenKind::RParen && tuples.len() == 1 {
            return Err(self.error_with_hint(
                &close,
                "non-empty linestring with only one point",
                HINT_LINESTRING_MIN_POINTS,
            ));
        }
        self.expect_rparen()?;
        Ok(tuples)
    }

    fn ring(&mut self) -> WktResult<Vec<Vec<f64>>> {
        self.expect_lparen()?;
        let tuples = self.tuple_list()?;
        let close = self.peek()?;
        if close.kind == TokenKind::RParen {
            if tuples.len() < 4 {
                return Err(self.error_with_hint(
                    &close,
                    "polygon ring doesn't have enough points",
                    HINT_RING_MIN_POINTS,
                ));
            }
            // Closure is judged on the X/Y position alone; Z and M may
            // differ between the first and last point.
            let first = &tuples[0];
            let last = &tuples[tuples.len() - 1];
            if first[..2] != last[..2] {
                return Err(self.error_with_hint(
                    &close,
                    "polygon ring not closed",
                    HINT_RING_NOT_CLOSED,
                ));
            }
        }
        self.expect_rparen()?;
        Ok(tuples)
    }

    /// Rings of a non-empty polygon body, up to and including the closing
    /// parenthesis.
    fn polygon_rings(&mut self) -> WktResult<Vec<Vec<Vec<f64>>>> {
        let mut rings = vec![self.ring()?];
        while self.eat_comma()? {
            rings.push(self.ring()?);
        }
        self.expect_rparen()?;
        Ok(rings)
    }

    fn multi_point_body(&mut self, in_base: bool) -> WktResult<MultiPoint> {
        let mut members: Vec<Option<Vec<f64>>> = Vec::new();
        loop {
            let tok = self.peek()?;
            match tok.kind {
                TokenKind::Empty => {
                    self.advance()?;
                    self.empty_layout(in_base, &tok)?;
                    members.push(None);
                }
                TokenKind::Num(_) => members.push(Some(self.tuple()?)),
                TokenKind::LParen => {
                    self.advance()?;
                    let coords = self.tuple()?;
                    self.expect_rparen()?;
                    members.push(Some(coords));
                }
                _ => return Err(self.unexpected(&tok, Some("EMPTY or NUM or '('"))),
            }
            if !self.eat_comma()? {
                break;
            }
        }
        self.expect_rparen()?;

        let mut multi_point = MultiPoint::empty(self.layout);
        for member in members {
            let point = match member {
                Some(coords) => Point::new(self.layout, coords)?,
                None => Point::empty(self.layout),
            };
            multi_point.push(point)?;
        }
        Ok(multi_point)
    }

    fn multi_line_string_body(&mut self, in_base: bool) -> WktResult<MultiLineString> {
        let mut members: Vec<Option<Vec<Vec<f64>>>> = Vec::new();
        loop {
            let tok = self.peek()?;
            match tok.kind {
                TokenKind::Empty => {
                    self.advance()?;
                    self.empty_layout(in_base, &tok)?;
                    members.push(None);
                }
                TokenKind::LParen => {
                    self.advance()?;
                    members.push(Some(self.line_string_tuples()?));
                }
                _ => return Err(self.unexpected(&tok, Some("EMPTY or '('"))),
            }
            if !self.eat_comma()? {
                break;
            }
        }
        self.expect_rparen()?;

        let mut multi_line_string = MultiLineString::empty(self.layout);
        for member in members {
            let line_string = match member {
                Some(tuples) => LineString::from_coords(self.layout, tuples)?,
                None => LineString::empty(self.layout),
            };
            multi_line_string.push(line_string)?;
        }
        Ok(multi_line_string)
    }

    fn multi_polygon_body(&mut self, in_base: bool) -> WktResult<MultiPolygon> {
        let mut members: Vec<Option<Vec<Vec<Vec<f64>>>>> = Vec::new();
        loop {
            let tok = self.peek()?;
            match tok.kind {
                TokenKind::Empty => {
                    self.advance()?;
                    self.empty_layout(in_base, &tok)?;
                    members.push(None);
                }
                TokenKind::LParen => {
                    self.advance()?;
                    members.push(Some(self.polygon_rings()?));
                }
                _ => return Err(self.unexpected(&tok, Some("EMPTY or '('"))),
            }
            if !self.eat_comma()? {
                break;
            }
        }
        self.expect_rparen()?;

        let mut multi_polygon = MultiPolygon::empty(self.layout);
        for member in members {
            let polygon = match member {
                Some(rings) => Polygon::from_coords(self.layout, rings)?,
                None => Polygon::empty(self.layout),
            };
            multi_polygon.push(polygon)?;
        }
        Ok(multi_polygon)
    }

    fn collection_body(&mut self, in_base: bool) -> WktResult<GeometryCollection> {
        let mut collection = GeometryCollection::empty();
        loop {
            let geom = self.geometry(in_base)?;
            collection.push(geom);
            if !self.eat_comma()? {
                break;
            }
        }
        self.expect_rparen()?;
        collection.set_layout(self.layout)?;
        Ok(collection)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn must_parse(input: &str) -> Geometry {
        parse(input).unwrap()
    }

    fn assert_equiv(inputs: &[&str], expected: &Geometry) {
        for input in inputs {
            assert_eq!(&must_parse(input), expected, "input: {input}");
        }
    }

    fn assert_parse_err(input: &str, expected: &str) {
        assert_eq!(parse(input).unwrap_err().to_string(), expected, "input: {input}");
    }

    fn point(layout: Layout, coords: &[f64]) -> Geometry {
        Point::new(layout, coords.to_vec()).unwrap().into()
    }

    fn line_string(layout: Layout, flat: &[f64]) -> Geometry {
        LineString::new_flat(layout, flat.to_vec()).unwrap().into()
    }

    fn polygon(layout: Layout, flat: &[f64], ends: &[usize]) -> Geometry {
        Polygon::new_flat(layout, flat.to_vec(), ends.to_vec())
            .unwrap()
            .into()
    }

    fn multi_point(layout: Layout, flat: &[f64], ends: &[usize]) -> Geometry {
        MultiPoint::new_flat(layout, flat.to_vec(), ends.to_vec())
            .unwrap()
            .into()
    }

    fn multi_line_string(layout: Layout, flat: &[f64], ends: &[usize]) -> Geometry {
        MultiLineString::new_flat(layout, flat.to_vec(), ends.to_vec())
            .unwrap()
            .into()
    }

    fn multi_polygon(layout: Layout, flat: &[f64], endss: &[&[usize]]) -> Geometry {
        MultiPolygon::new_flat(
            layout,
            flat.to_vec(),
            endss.iter().map(|e| e.to_vec()).collect(),
        )
        .unwrap()
        .into()
    }

    fn collection(layout: Layout, geoms: Vec<Geometry>) -> Geometry {
        let mut gc = GeometryCollection::new(geoms);
        gc.set_layout(layout).unwrap();
        gc.into()
    }

    #[test]
    fn point_2d() {
        assert_equiv(
            &["POINT(0 1)", "POINT (0 1)", "point(0 1)", "point ( 0 1 )"],
            &point(Layout::XY, &[0.0, 1.0]),
        );
    }

    #[test]
    fn point_scientific_notation() {
        assert_equiv(
            &[
                "POINT(1e-2 2e3)",
                "POINT(0.1e-1 2e3)",
                "POINT(0.01e-0 2e+3)",
                "POINT(0.01 2000)",
            ],
            &point(Layout::XY, &[1e-2, 2e3]),
        );
    }

    #[test]
    fn point_xym() {
        assert_equiv(
            &["POINT M (-2 0 0.5)", "POINTM(-2 0 0.5)", "POINTM(-2 0 .5)"],
            &point(Layout::XYM, &[-2.0, 0.0, 0.5]),
        );
    }

    #[test]
    fn point_layout_inferred_from_count() {
        assert_equiv(
            &["POINT Z (2 3 4)", "POINTZ(2 3 4)", "POINT(2 3 4)"],
            &point(Layout::XYZ, &[2.0, 3.0, 4.0]),
        );
        assert_equiv(
            &["POINT ZM (0 5 -10 15)", "POINTZM (0 5 -10 15)", "POINT(0 5 -10 15)"],
            &point(Layout::XYZM, &[0.0, 5.0, -10.0, 15.0]),
        );
    }

    #[test]
    fn empty_points() {
        assert_equiv(&["POINT EMPTY"], &Point::empty(Layout::XY).into());
        assert_equiv(
            &["POINT M EMPTY", "POINTM EMPTY"],
            &Point::empty(Layout::XYM).into(),
        );
        assert_equiv(
            &["POINT Z EMPTY", "POINTZ EMPTY"],
            &Point::empty(Layout::XYZ).into(),
        );
        assert_equiv(
            &["POINT ZM EMPTY", "POINTZM EMPTY"],
            &Point::empty(Layout::XYZM).into(),
        );
    }

    #[test]
    fn line_strings() {
        assert_equiv(
            &[
                "LINESTRING(0 0, 1 1, 3 4)",
                "LINESTRING (0 0, 1 1, 3 4)",
                "linestring ( 0 0, 1 1, 3 4 )",
            ],
            &line_string(Layout::XY, &[0.0, 0.0, 1.0, 1.0, 3.0, 4.0]),
        );
        assert_equiv(
            &[
                "LINESTRING M(0 0 200, 0.1 -1 -20)",
                "LINESTRINGM(0 0 200, .1 -1 -20)",
            ],
            &line_string(Layout::XYM, &[0.0, 0.0, 200.0, 0.1, -1.0, -20.0]),
        );
        assert_equiv(
            &[
                "LINESTRING(0 -1 1, 7 -1 -9)",
                "LINESTRING Z(0 -1 1, 7 -1 -9)",
                "LINESTRINGZ(0 -1 1, 7 -1 -9)",
            ],
            &line_string(Layout::XYZ, &[0.0, -1.0, 1.0, 7.0, -1.0, -9.0]),
        );
        assert_equiv(
            &[
                "LINESTRING(0 0 0 0, 1 1 1 1)",
                "LINESTRING ZM (0 0 0 0, 1 1 1 1)",
                "LINESTRINGZM (0 0 0 0, 1 1 1 1)",
            ],
            &line_string(Layout::XYZM, &[0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0]),
        );
        assert_equiv(&["LINESTRING EMPTY"], &LineString::empty(Layout::XY).into());
        assert_equiv(
            &["LINESTRING ZM EMPTY", "LINESTRINGZM EMPTY"],
            &LineString::empty(Layout::XYZM).into(),
        );
    }

    #[test]
    fn polygons() {
        assert_equiv(
            &[
                "POLYGON((0 0, 1 -1, 2 0, 0 0))",
                "POLYGON ((0 0, 1 -1, 2 0, 0 0))",
            ],
            &polygon(Layout::XY, &[0.0, 0.0, 1.0, -1.0, 2.0, 0.0, 0.0, 0.0], &[8]),
        );
        assert_equiv(
            &["POLYGON((0 0, 0 100, 100 100, 100 0, 0 0),(10 10, 11 11, 12 10, 10 10))"],
            &polygon(
                Layout::XY,
                &[
                    0.0, 0.0, 0.0, 100.0, 100.0, 100.0, 100.0, 0.0, 0.0, 0.0, 10.0, 10.0, 11.0,
                    11.0, 12.0, 10.0, 10.0, 10.0,
                ],
                &[10, 18],
            ),
        );
        assert_equiv(
            &[
                "POLYGONM((0 0 7, 1 -1 -50, 2 0 0, 0 0 7))",
                "POLYGON M ((0 0 7, 1 -1 -50, 2 0 0, 0 0 7))",
            ],
            &polygon(
                Layout::XYM,
                &[0.0, 0.0, 7.0, 1.0, -1.0, -50.0, 2.0, 0.0, 0.0, 0.0, 0.0, 7.0],
                &[12],
            ),
        );
        assert_equiv(
            &[
                "POLYGON((0 0 7, 1 -1 -50, 2 0 0, 0 0 7))",
                "POLYGON Z ((0 0 7, 1 -1 -50, 2 0 0, 0 0 7))",
            ],
            &polygon(
                Layout::XYZ,
                &[0.0, 0.0, 7.0, 1.0, -1.0, -50.0, 2.0, 0.0, 0.0, 0.0, 0.0, 7.0],
                &[12],
            ),
        );
        assert_equiv(&["POLYGON EMPTY"], &Polygon::empty(Layout::XY).into());
        assert_equiv(
            &["POLYGON Z EMPTY", "POLYGONZ EMPTY"],
            &Polygon::empty(Layout::XYZ).into(),
        );
    }

    #[test]
    fn ring_closure_ignores_z_and_m() {
        assert_equiv(
            &["POLYGON M ((0 0 0, 1 0 1, 1 1 2, 0 0 3))"],
            &polygon(
                Layout::XYM,
                &[0.0, 0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 1.0, 2.0, 0.0, 0.0, 3.0],
                &[12],
            ),
        );
        assert_equiv(
            &["POLYGON ZM ((0 0 0 0, 1 0 -1 1, 1 1 -2 2, 0 0 0 3))"],
            &polygon(
                Layout::XYZM,
                &[
                    0.0, 0.0, 0.0, 0.0, 1.0, 0.0, -1.0, 1.0, 1.0, 1.0, -2.0, 2.0, 0.0, 0.0, 0.0,
                    3.0,
                ],
                &[16],
            ),
        );
    }

    #[test]
    fn multi_points() {
        assert_equiv(
            &[
                "MULTIPOINT(0 0, 1 1, 2 2)",
                "MULTIPOINT((0 0), 1 1, (2 2))",
                "MULTIPOINT (0 0, 1 1, 2 2)",
            ],
            &multi_point(Layout::XY, &[0.0, 0.0, 1.0, 1.0, 2.0, 2.0], &[2, 4, 6]),
        );
        assert_equiv(
            &[
                "MULTIPOINTM((-1 5 -16), .23 7 0)",
                "MULTIPOINT M (-1 5 -16, 0.23 7.0 0)",
            ],
            &multi_point(Layout::XYM, &[-1.0, 5.0, -16.0, 0.23, 7.0, 0.0], &[3, 6]),
        );
        assert_equiv(
            &["MULTIPOINT(2 1 3)", "MULTIPOINTZ(2 1 3)", "MULTIPOINT Z ((2 1 3))"],
            &multi_point(Layout::XYZ, &[2.0, 1.0, 3.0], &[3]),
        );
    }

    #[test]
    fn multi_points_with_empty_members() {
        assert_equiv(
            &["MULTIPOINT(EMPTY, 2 3, EMPTY)", "MULTIPOINT (EMPTY, (2 3), EMPTY)"],
            &multi_point(Layout::XY, &[2.0, 3.0], &[0, 2, 2]),
        );
        assert_equiv(
            &["MULTIPOINTM(2 3 1, EMPTY)", "MULTIPOINT M ((2 3 1), EMPTY)"],
            &multi_point(Layout::XYM, &[2.0, 3.0, 1.0], &[3, 3]),
        );
        assert_equiv(
            &["MULTIPOINTZ (EMPTY, EMPTY)", "MULTIPOINT Z (EMPTY, EMPTY)"],
            &multi_point(Layout::XYZ, &[], &[0, 0]),
        );
        assert_equiv(
            &["MULTIPOINTZM(EMPTY, 1 -1 1 -1)", "MULTIPOINT ZM (EMPTY, (1 -1 1 -1))"],
            &multi_point(Layout::XYZM, &[1.0, -1.0, 1.0, -1.0], &[0, 4]),
        );
        assert_equiv(&["MULTIPOINT EMPTY"], &MultiPoint::empty(Layout::XY).into());
        assert_equiv(
            &["MULTIPOINT M EMPTY", "MULTIPOINTM EMPTY"],
            &MultiPoint::empty(Layout::XYM).into(),
        );
    }

    #[test]
    fn multi_line_strings() {
        assert_equiv(
            &[
                "MULTILINESTRING((0 0, 1 1), EMPTY)",
                "MULTILINESTRING (( 0 0, 1 1 ), EMPTY )",
            ],
            &multi_line_string(Layout::XY, &[0.0, 0.0, 1.0, 1.0], &[4, 4]),
        );
        assert_equiv(
            &[
                "MULTILINESTRINGM((0 -1 -2, 2 5 7))",
                "multilinestring m ((0 -1 -2, 2 5 7))",
            ],
            &multi_line_string(Layout::XYM, &[0.0, -1.0, -2.0, 2.0, 5.0, 7.0], &[6]),
        );
        assert_equiv(
            &[
                "MULTILINESTRINGZ(EMPTY, EMPTY, (1 1 1, 2 2 2, 3 3 3))",
                "multilinestring z (EMPTY, empty, (1 1 1, 2 2 2, 3 3 3))",
            ],
            &multi_line_string(
                Layout::XYZ,
                &[1.0, 1.0, 1.0, 2.0, 2.0, 2.0, 3.0, 3.0, 3.0],
                &[0, 0, 9],
            ),
        );
        assert_equiv(
            &["MULTILINESTRINGZM(EMPTY)", "MuLTIliNeStRiNg zM (EMPTY)"],
            &multi_line_string(Layout::XYZM, &[], &[0]),
        );
        assert_equiv(
            &["MULTILINESTRING EMPTY"],
            &MultiLineString::empty(Layout::XY).into(),
        );
    }

    #[test]
    fn multi_polygons() {
        assert_equiv(
            &["MULTIPOLYGON(((1 0, 2 5, -2 5, 1 0)))"],
            &multi_polygon(
                Layout::XY,
                &[1.0, 0.0, 2.0, 5.0, -2.0, 5.0, 1.0, 0.0],
                &[&[8]],
            ),
        );
        assert_equiv(
            &["MULTIPOLYGON(((1 0, 2 5, -2 5, 1 0)), EMPTY)"],
            &multi_polygon(
                Layout::XY,
                &[1.0, 0.0, 2.0, 5.0, -2.0, 5.0, 1.0, 0.0],
                &[&[8], &[]],
            ),
        );
        assert_equiv(
            &["MULTIPOLYGON(EMPTY, ((1 0, 2 5, -2 5, 1 0)))"],
            &multi_polygon(
                Layout::XY,
                &[1.0, 0.0, 2.0, 5.0, -2.0, 5.0, 1.0, 0.0],
                &[&[], &[8]],
            ),
        );
        assert_equiv(
            &["MULTIPOLYGON(((1 0, 2 5, -2 5, 1 0)), EMPTY, ((-1 -1, 2 7, 3 0, -1 -1)))"],
            &multi_polygon(
                Layout::XY,
                &[
                    1.0, 0.0, 2.0, 5.0, -2.0, 5.0, 1.0, 0.0, -1.0, -1.0, 2.0, 7.0, 3.0, 0.0, -1.0,
                    -1.0,
                ],
                &[&[8], &[], &[16]],
            ),
        );
        assert_equiv(
            &["MULTIPOLYGON M (((0 0 0, 1 1 1, 2 3 1, 0 0 0)))"],
            &multi_polygon(
                Layout::XYM,
                &[0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 2.0, 3.0, 1.0, 0.0, 0.0, 0.0],
                &[&[12]],
            ),
        );
        assert_equiv(
            &[
                "MULTIPOLYGON(((0 0 0, 1 1 1, 2 3 1, 0 0 0)))",
                "MULTIPOLYGON Z (((0 0 0, 1 1 1, 2 3 1, 0 0 0)))",
            ],
            &multi_polygon(
                Layout::XYZ,
                &[0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 2.0, 3.0, 1.0, 0.0, 0.0, 0.0],
                &[&[12]],
            ),
        );
        assert_equiv(&["MULTIPOLYGON EMPTY"], &MultiPolygon::empty(Layout::XY).into());
        assert_equiv(
            &["MULTIPOLYGON ZM EMPTY", "MULTIPOLYGONZM EMPTY"],
            &MultiPolygon::empty(Layout::XYZM).into(),
        );
    }

    #[test]
    fn collection_with_single_point() {
        assert_equiv(
            &["GEOMETRYCOLLECTION(POINT(0 0))"],
            &collection(Layout::XY, vec![point(Layout::XY, &[0.0, 0.0])]),
        );
    }

    #[test]
    fn collection_base_form_adopts_member_layout() {
        assert_equiv(
            &[
                "GEOMETRYCOLLECTION M (POINT M (0 0 0))",
                "GEOMETRYCOLLECTION(POINT M (0 0 0))",
            ],
            &collection(Layout::XYM, vec![point(Layout::XYM, &[0.0, 0.0, 0.0])]),
        );
    }

    #[test]
    fn collection_empty_members_adopt_declared_layout() {
        assert_equiv(
            &[
                "GEOMETRYCOLLECTION M (LINESTRING EMPTY)",
                "GEOMETRYCOLLECTION(LINESTRING M EMPTY)",
                "GEOMETRYCOLLECTION M (LINESTRING M EMPTY)",
            ],
            &collection(Layout::XYM, vec![LineString::empty(Layout::XYM).into()]),
        );
        assert_equiv(
            &[
                "GEOMETRYCOLLECTION Z (LINESTRING EMPTY)",
                "GEOMETRYCOLLECTION Z (LINESTRING Z EMPTY)",
            ],
            &collection(Layout::XYZ, vec![LineString::empty(Layout::XYZ).into()]),
        );
    }

    #[test]
    fn nested_collection_with_empty_members() {
        let expected = collection(
            Layout::XYM,
            vec![
                collection(Layout::XYM, vec![LineString::empty(Layout::XYM).into()]),
                LineString::empty(Layout::XYM).into(),
            ],
        );
        assert_equiv(
            &[
                "GEOMETRYCOLLECTION(GEOMETRYCOLLECTION(LINESTRING M EMPTY), LINESTRING M EMPTY)",
                "GEOMETRYCOLLECTION(GEOMETRYCOLLECTION M (LINESTRING EMPTY), LINESTRING M EMPTY)",
                "GEOMETRYCOLLECTION(GEOMETRYCOLLECTION M (LINESTRING M EMPTY), LINESTRING M EMPTY)",
                "GEOMETRYCOLLECTION M (GEOMETRYCOLLECTION(LINESTRING EMPTY), LINESTRING EMPTY)",
                "GEOMETRYCOLLECTION M (GEOMETRYCOLLECTION M (LINESTRING EMPTY), LINESTRING EMPTY)",
                "GEOMETRYCOLLECTION M (GEOMETRYCOLLECTION(LINESTRING M EMPTY), LINESTRING EMPTY)",
                "GEOMETRYCOLLECTION M (GEOMETRYCOLLECTION(LINESTRING EMPTY), LINESTRING M EMPTY)",
                "GEOMETRYCOLLECTION M (GEOMETRYCOLLECTION(LINESTRING M EMPTY), LINESTRING M EMPTY)",
                "GEOMETRYCOLLECTION M (GEOMETRYCOLLECTION M (LINESTRING EMPTY), LINESTRING M EMPTY)",
                "GEOMETRYCOLLECTION M (GEOMETRYCOLLECTION M (LINESTRING M EMPTY), LINESTRING M EMPTY)",
            ],
            &expected,
        );
    }

    #[test]
    fn nested_empty_collection_adopts_declared_layout() {
        let empty_xym = {
            let mut gc = GeometryCollection::empty();
            gc.set_layout(Layout::XYM).unwrap();
            Geometry::from(gc)
        };
        assert_equiv(
            &[
                "GEOMETRYCOLLECTION M (GEOMETRYCOLLECTION EMPTY)",
                "GEOMETRYCOLLECTION M (GEOMETRYCOLLECTION M EMPTY)",
            ],
            &collection(Layout::XYM, vec![empty_xym]),
        );
    }

    #[test]
    fn nested_collection_xyz_variants() {
        let expected = collection(
            Layout::XYZ,
            vec![
                collection(Layout::XYZ, vec![Polygon::empty(Layout::XYZ).into()]),
                Point::empty(Layout::XYZ).into(),
            ],
        );
        assert_equiv(
            &[
                "GEOMETRYCOLLECTION(GEOMETRYCOLLECTION Z (POLYGON Z EMPTY), POINT Z EMPTY)",
                "GEOMETRYCOLLECTION(GEOMETRYCOLLECTION(POLYGON Z EMPTY), POINT Z EMPTY)",
                "GEOMETRYCOLLECTION Z (GEOMETRYCOLLECTION(POLYGON EMPTY), POINT EMPTY)",
                "GEOMETRYCOLLECTION Z (GEOMETRYCOLLECTION Z (POLYGON EMPTY), POINT EMPTY)",
                "GEOMETRYCOLLECTION Z (GEOMETRYCOLLECTION Z (POLYGON Z EMPTY), POINT Z EMPTY)",
            ],
            &expected,
        );
    }

    #[test]
    fn collection_of_every_kind() {
        let expected = collection(
            Layout::XY,
            vec![
                point(Layout::XY, &[0.0, 0.0]),
                line_string(Layout::XY, &[1.0, 1.0, 0.0, 0.0, 1.0, 4.0]),
                polygon(
                    Layout::XY,
                    &[
                        0.0, 0.0, 0.0, 100.0, 100.0, 100.0, 100.0, 0.0, 0.0, 0.0, 10.0, 10.0,
                        11.0, 11.0, 12.0, 10.0, 10.0, 10.0, 2.0, 2.0, 4.0, 4.0, 5.0, 1.0, 2.0, 2.0,
                    ],
                    &[10, 18, 26],
                ),
                multi_point(Layout::XY, &[23.0, 24.0], &[2, 2]),
                multi_line_string(Layout::XY, &[1.0, 1.0, 0.0, 0.0, 1.0, 4.0], &[6]),
                multi_polygon(
                    Layout::XY,
                    &[0.0, 0.0, 0.0, 100.0, 100.0, 100.0, 100.0, 0.0, 0.0, 0.0],
                    &[&[10]],
                ),
                collection(Layout::XY, vec![]),
            ],
        );
        assert_equiv(
            &["GEOMETRYCOLLECTION(
POINT(0 0),
LINESTRING(1 1, 0 0, 1 4),
POLYGON((0 0, 0 100, 100 100, 100 0, 0 0), (10 10, 11 11, 12 10, 10 10), (2 2, 4 4, 5 1, 2 2)),
MULTIPOINT((23 24), EMPTY),
MULTILINESTRING((1 1, 0 0, 1 4)),
MULTIPOLYGON(((0 0, 0 100, 100 100, 100 0, 0 0))),
GEOMETRYCOLLECTION EMPTY
)"],
            &expected,
        );
    }

    #[test]
    fn nested_collection_with_multipoint() {
        assert_equiv(
            &["GEOMETRYCOLLECTION(POINT(0 0), GEOMETRYCOLLECTION(MULTIPOINT(EMPTY, 2 1)))"],
            &collection(
                Layout::XY,
                vec![
                    point(Layout::XY, &[0.0, 0.0]),
                    collection(
                        Layout::XY,
                        vec![multi_point(Layout::XY, &[2.0, 1.0], &[0, 2])],
                    ),
                ],
            ),
        );
    }

    #[test]
    fn collection_xym_every_kind() {
        let expected = collection(
            Layout::XYM,
            vec![
                Point::empty(Layout::XYM).into(),
                point(Layout::XYM, &[-2.0, 0.0, 0.5]),
                line_string(Layout::XYM, &[0.0, 0.0, 200.0, 0.1, -1.0, -20.0]),
                polygon(
                    Layout::XYM,
                    &[0.0, 0.0, 7.0, 1.0, -1.0, -50.0, 2.0, 0.0, 0.0, 0.0, 0.0, 7.0],
                    &[12],
                ),
                multi_point(Layout::XYM, &[-1.0, 5.0, -16.0, 0.23, 7.0, 0.0], &[3, 6]),
                multi_line_string(Layout::XYM, &[0.0, -1.0, -2.0, 2.0, 5.0, 7.0], &[6]),
                multi_polygon(
                    Layout::XYM,
                    &[0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 2.0, 3.0, 1.0, 0.0, 0.0, 0.0],
                    &[&[12]],
                ),
            ],
        );
        assert_equiv(
            &[
                "GEOMETRYCOLLECTION M (
POINT EMPTY,
POINT M (-2 0 0.5),
LINESTRING M (0 0 200, 0.1 -1 -20),
POLYGON M ((0 0 7, 1 -1 -50, 2 0 0, 0 0 7)),
MULTIPOINT M (-1 5 -16, 0.23 7.0 0),
MULTILINESTRING M ((0 -1 -2, 2 5 7)),
MULTIPOLYGON M (((0 0 0, 1 1 1, 2 3 1, 0 0 0)))
)",
                "GEOMETRYCOLLECTION(
POINT M EMPTY,
POINT M (-2 0 0.5),
LINESTRING M (0 0 200, 0.1 -1 -20),
POLYGON M ((0 0 7, 1 -1 -50, 2 0 0, 0 0 7)),
MULTIPOINT M (-1 5 -16, 0.23 7.0 0),
MULTILINESTRING M ((0 -1 -2, 2 5 7)),
MULTIPOLYGON M (((0 0 0, 1 1 1, 2 3 1, 0 0 0)))
)",
            ],
            &expected,
        );
    }

    #[test]
    fn nested_collection_xym_member_variants() {
        let expected = collection(
            Layout::XYM,
            vec![collection(
                Layout::XYM,
                vec![
                    Point::empty(Layout::XYM).into(),
                    line_string(Layout::XYM, &[0.0, 0.0, 0.0, 1.0, 1.0, 1.0]),
                ],
            )],
        );
        assert_equiv(
            &[
                "GEOMETRYCOLLECTION(GEOMETRYCOLLECTION M (POINT EMPTY, LINESTRING M (0 0 0, 1 1 1)))",
                "GEOMETRYCOLLECTION(GEOMETRYCOLLECTION M (POINT M EMPTY, LINESTRING M (0 0 0, 1 1 1)))",
                "GEOMETRYCOLLECTION(GEOMETRYCOLLECTION(POINT M EMPTY, LINESTRING M (0 0 0, 1 1 1)))",
                "GEOMETRYCOLLECTION M (GEOMETRYCOLLECTION(POINT M EMPTY, LINESTRING M (0 0 0, 1 1 1)))",
                "GEOMETRYCOLLECTION M (GEOMETRYCOLLECTION M (POINT M EMPTY, LINESTRING M (0 0 0, 1 1 1)))",
            ],
            &expected,
        );
    }

    #[test]
    fn collection_xyz_suffix_optional_per_member() {
        let expected = collection(
            Layout::XYZ,
            vec![
                point(Layout::XYZ, &[2.0, 3.0, 4.0]),
                line_string(Layout::XYZ, &[0.0, -1.0, 1.0, 7.0, -1.0, -9.0]),
                polygon(
                    Layout::XYZ,
                    &[0.0, 0.0, 7.0, 1.0, -1.0, -50.0, 2.0, 0.0, 0.0, 0.0, 0.0, 7.0],
                    &[12],
                ),
                multi_point(Layout::XYZ, &[2.0, 3.0, 1.0], &[3, 3]),
                multi_line_string(
                    Layout::XYZ,
                    &[1.0, 1.0, 1.0, 2.0, 2.0, 2.0, 3.0, 3.0, 3.0],
                    &[0, 0, 9],
                ),
                multi_polygon(
                    Layout::XYZ,
                    &[0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 2.0, 3.0, 1.0, 0.0, 0.0, 0.0],
                    &[&[12]],
                ),
            ],
        );
        assert_equiv(
            &[
                "GEOMETRYCOLLECTION Z (
POINT Z (2 3 4),
LINESTRING Z (0 -1 1, 7 -1 -9),
POLYGON Z ((0 0 7, 1 -1 -50, 2 0 0, 0 0 7)),
MULTIPOINT Z ((2 3 1), EMPTY),
MULTILINESTRING Z (EMPTY, EMPTY, (1 1 1, 2 2 2, 3 3 3)),
MULTIPOLYGON Z (((0 0 0, 1 1 1, 2 3 1, 0 0 0)))
)",
                "GEOMETRYCOLLECTION Z (
POINT(2 3 4),
LINESTRING(0 -1 1, 7 -1 -9),
POLYGON((0 0 7, 1 -1 -50, 2 0 0, 0 0 7)),
MULTIPOINT((2 3 1), EMPTY),
MULTILINESTRING(EMPTY, EMPTY, (1 1 1, 2 2 2, 3 3 3)),
MULTIPOLYGON(((0 0 0, 1 1 1, 2 3 1, 0 0 0)))
)",
                "GEOMETRYCOLLECTION(
POINT(2 3 4),
LINESTRING(0 -1 1, 7 -1 -9),
POLYGON((0 0 7, 1 -1 -50, 2 0 0, 0 0 7)),
MULTIPOINT Z ((2 3 1), EMPTY),
MULTILINESTRING Z (EMPTY, EMPTY, (1 1 1, 2 2 2, 3 3 3)),
MULTIPOLYGON(((0 0 0, 1 1 1, 2 3 1, 0 0 0)))
)",
            ],
            &expected,
        );
    }

    #[test]
    fn empty_collections() {
        assert_equiv(
            &["GEOMETRYCOLLECTION EMPTY"],
            &collection(Layout::XY, vec![]),
        );
        assert_equiv(
            &["GEOMETRYCOLLECTION M EMPTY", "GEOMETRYCOLLECTIONM EMPTY"],
            &collection(Layout::XYM, vec![]),
        );
        assert_equiv(
            &["GEOMETRYCOLLECTION ZM EMPTY", "GEOMETRYCOLLECTIONZM EMPTY"],
            &collection(Layout::XYZM, vec![]),
        );
    }

    #[test]
    fn empty_geometries_with_arbitrary_spacing() {
        assert_equiv(&["POINT      EMPTY"], &Point::empty(Layout::XY).into());
        assert_equiv(
            &["MULTIPOLYGON                EMPTY"],
            &MultiPolygon::empty(Layout::XY).into(),
        );
        assert_equiv(
            &["GEOMETRYCOLLECTION      EMPTY"],
            &collection(Layout::XY, vec![]),
        );
    }

    /// Builds the expected rendering of a syntax error: message line,
    /// quoted line, caret at the given display column, optional hint.
    fn err_str(message: &str, quoted: &str, caret_col: usize, hint: Option<&str>) -> String {
        let mut s = format!("syntax error: {message}\n{quoted}\n{}^", " ".repeat(caret_col));
        if let Some(hint) = hint {
            s.push_str("\nHINT: ");
            s.push_str(hint);
        }
        s
    }

    #[test]
    fn point_errors() {
        assert_parse_err(
            "POINT(0 0",
            &err_str(
                "unexpected $end, expecting ')' at line 1, pos 9",
                "LINE 1: POINT(0 0",
                17,
                None,
            ),
        );
        assert_parse_err(
            "POINT(0, 0)",
            &err_str(
                "not enough coordinates at line 1, pos 7",
                "LINE 1: POINT(0, 0)",
                15,
                Some("each point needs at least 2 coords"),
            ),
        );
    }

    #[test]
    fn line_string_errors() {
        assert_parse_err(
            "LINESTRING()",
            &err_str(
                "unexpected ')', expecting NUM at line 1, pos 11",
                "LINE 1: LINESTRING()",
                19,
                None,
            ),
        );
        assert_parse_err(
            "LINESTRING(0 0)",
            &err_str(
                "non-empty linestring with only one point at line 1, pos 14",
                "LINE 1: LINESTRING(0 0)",
                22,
                Some("minimum number of points is 2"),
            ),
        );
        assert_parse_err(
            "LINESTRING(0 0, 1 1 1)",
            &err_str(
                "mixed dimensionality, parsed layout is XY so expecting 2 coords but got 3 coords at line 1, pos 21",
                "LINE 1: LINESTRING(0 0, 1 1 1)",
                29,
                None,
            ),
        );
    }

    #[test]
    fn polygon_errors() {
        assert_parse_err(
            "POLYGON((0 0, 1 1, 2 0))",
            &err_str(
                "polygon ring doesn't have enough points at line 1, pos 22",
                "LINE 1: POLYGON((0 0, 1 1, 2 0))",
                30,
                Some("minimum number of points is 4"),
            ),
        );
        assert_parse_err(
            "POLYGON((0 0, 1 1, 2 0, 1 -1))",
            &err_str(
                "polygon ring not closed at line 1, pos 28",
                "LINE 1: POLYGON((0 0, 1 1, 2 0, 1 -1))",
                36,
                Some("ensure first and last point are the same"),
            ),
        );
        assert_parse_err(
            "POLYGON((0 0, 1 -1, 2 0, 0 0), ())",
            &err_str(
                "unexpected ')', expecting NUM at line 1, pos 32",
                "LINE 1: ...LYGON((0 0, 1 -1, 2 0, 0 0), ())",
                41,
                None,
            ),
        );
        assert_parse_err(
            "POLYGON((0 0, 1 -1, 2 0, 0 0), EMPTY)",
            &err_str(
                "unexpected EMPTY, expecting '(' at line 1, pos 31",
                "LINE 1: ...OLYGON((0 0, 1 -1, 2 0, 0 0), EMPTY)",
                41,
                None,
            ),
        );
        assert_parse_err(
            "POLYGON((0 0, 1 -1, 2 0, 0 0), (0.5 -0.5))",
            &err_str(
                "polygon ring doesn't have enough points at line 1, pos 40",
                "LINE 1: ... 0, 1 -1, 2 0, 0 0), (0.5 -0.5))",
                41,
                Some("minimum number of points is 4"),
            ),
        );
    }

    #[test]
    fn multi_point_errors() {
        assert_parse_err(
            "MULTIPOINT()",
            &err_str(
                "unexpected ')', expecting EMPTY or NUM or '(' at line 1, pos 11",
                "LINE 1: MULTIPOINT()",
                19,
                None,
            ),
        );
        assert_parse_err(
            "MULTIPOINT Z (0 0 0 0 0 0)",
            &err_str(
                "too many coordinates at line 1, pos 25",
                "LINE 1: MULTIPOINT Z (0 0 0 0 0 0)",
                33,
                Some("each point can have at most 4 coords"),
            ),
        );
        assert_parse_err(
            "MULTIPOINT((EMPTY))",
            &err_str(
                "unexpected EMPTY, expecting NUM at line 1, pos 12",
                "LINE 1: MULTIPOINT((EMPTY))",
                20,
                None,
            ),
        );
        assert_parse_err(
            "MULTIPOINT(0 0 0, EMPTY)",
            &err_str(
                "mixed dimensionality, parsed layout is XYZ but encountered layout of XY at line 1, pos 18",
                "LINE 1: MULTIPOINT(0 0 0, EMPTY)",
                26,
                Some("EMPTY is XY layout in base geometry type"),
            ),
        );
        assert_parse_err(
            "MULTIPOINT(0 0 0, 1 1)",
            &err_str(
                "mixed dimensionality, parsed layout is XYZ so expecting 3 coords but got 2 coords at line 1, pos 21",
                "LINE 1: MULTIPOINT(0 0 0, 1 1)",
                29,
                None,
            ),
        );
    }

    #[test]
    fn multi_line_string_errors() {
        assert_parse_err(
            "MULTILINESTRING(())",
            &err_str(
                "unexpected ')', expecting NUM at line 1, pos 17",
                "LINE 1: MULTILINESTRING(())",
                25,
                None,
            ),
        );
        assert_parse_err(
            "MULTILINESTRING((0 0))",
            &err_str(
                "non-empty linestring with only one point at line 1, pos 20",
                "LINE 1: MULTILINESTRING((0 0))",
                28,
                Some("minimum number of points is 2"),
            ),
        );
        assert_parse_err(
            "MULTILINESTRING(EMPTY, (0 0 0 0, 2 3 -2 -3))",
            &err_str(
                "mixed dimensionality, parsed layout is XY so expecting 2 coords but got 4 coords at line 1, pos 31",
                "LINE 1: ...ULTILINESTRING(EMPTY, (0 0 0 0, 2 3 -2 -3))",
                41,
                None,
            ),
        );
    }

    #[test]
    fn multi_polygon_errors() {
        assert_parse_err(
            "MULTIPOLYGON()",
            &err_str(
                "unexpected ')', expecting EMPTY or '(' at line 1, pos 13",
                "LINE 1: MULTIPOLYGON()",
                21,
                None,
            ),
        );
        assert_parse_err(
            "MULTIPOLYGON((1 0, 2 5, -2 5, 1 0))",
            &err_str(
                "unexpected NUM, expecting '(' at line 1, pos 14",
                "LINE 1: MULTIPOLYGON((1 0, 2 5, -2 5, 1 0))",
                22,
                None,
            ),
        );
        assert_parse_err(
            "MULTIPOLYGON(((1 0, 2 5, -2 5, 1 0)), ((1 0 2, 2 5 1, -2 5 -1, 1 0 2)))",
            &err_str(
                "mixed dimensionality, parsed layout is XY so expecting 2 coords but got 3 coords at line 1, pos 45",
                "LINE 1: ...1 0, 2 5, -2 5, 1 0)), ((1 0 2, 2 5 1, -2 5 -1, 1 0 2)))",
                41,
                None,
            ),
        );
        assert_parse_err(
            "MULTIPOLYGON(((0 0, 1 1, 2 0)))",
            &err_str(
                "polygon ring doesn't have enough points at line 1, pos 28",
                "LINE 1: MULTIPOLYGON(((0 0, 1 1, 2 0)))",
                36,
                Some("minimum number of points is 4"),
            ),
        );
        assert_parse_err(
            "MULTIPOLYGON(((0 0, 1 1, 2 0, 1 -1)))",
            &err_str(
                "polygon ring not closed at line 1, pos 34",
                "LINE 1: ...IPOLYGON(((0 0, 1 1, 2 0, 1 -1)))",
                41,
                Some("ensure first and last point are the same"),
            ),
        );
        assert_parse_err(
            "MULTIPOLYGON(((0 0, 1 -1, 2 0, 0 0), ()))",
            &err_str(
                "unexpected ')', expecting NUM at line 1, pos 38",
                "LINE 1: ...YGON(((0 0, 1 -1, 2 0, 0 0), ()))",
                41,
                None,
            ),
        );
        assert_parse_err(
            "MULTIPOLYGON(((0 0, 1 -1, 2 0, 0 0), EMPTY))",
            &err_str(
                "unexpected EMPTY, expecting '(' at line 1, pos 37",
                "LINE 1: ...LYGON(((0 0, 1 -1, 2 0, 0 0), EMPTY))",
                41,
                None,
            ),
        );
        assert_parse_err(
            "MULTIPOLYGON(((0 0, 1 -1, 2 0, 0 0), (0.5 -0.5)))",
            &err_str(
                "polygon ring doesn't have enough points at line 1, pos 46",
                "LINE 1: ... 0, 1 -1, 2 0, 0 0), (0.5 -0.5)))",
                41,
                Some("minimum number of points is 4"),
            ),
        );
        assert_parse_err(
            "MULTIPOLYGON(EMPTY, ((0 0 0, 1 1 1, 2 3 1, 0 0 0)))",
            &err_str(
                "mixed dimensionality, parsed layout is XY so expecting 2 coords but got 3 coords at line 1, pos 27",
                "LINE 1: MULTIPOLYGON(EMPTY, ((0 0 0, 1 1 1, 2 3 1, 0 0 0)))",
                35,
                None,
            ),
        );
    }

    #[test]
    fn collection_errors() {
        assert_parse_err(
            "GEOMETRYCOLLECTION(EMPTY)",
            &err_str(
                "unexpected EMPTY at line 1, pos 19",
                "LINE 1: GEOMETRYCOLLECTION(EMPTY)",
                27,
                None,
            ),
        );
        assert_parse_err(
            "GEOMETRYCOLLECTION Z ()",
            &err_str(
                "unexpected ')' at line 1, pos 22",
                "LINE 1: GEOMETRYCOLLECTION Z ()",
                30,
                None,
            ),
        );
        assert_parse_err(
            "GEOMETRYCOLLECTION Z (GEOMETRYCOLLECTION(POINT(0 0)))",
            &err_str(
                "mixed dimensionality, parsed layout is XYZ so expecting 3 coords but got 2 coords at line 1, pos 50",
                "LINE 1: ... (GEOMETRYCOLLECTION(POINT(0 0)))",
                41,
                None,
            ),
        );
        assert_parse_err(
            "GEOMETRYCOLLECTION(POINT(0 0 0), LINESTRING EMPTY)",
            &err_str(
                "mixed dimensionality, parsed layout is XYZ but encountered layout of XY at line 1, pos 44",
                "LINE 1: ...TION(POINT(0 0 0), LINESTRING EMPTY)",
                41,
                Some("EMPTY is XY layout in base geometry type"),
            ),
        );
        assert_parse_err(
            "GEOMETRYCOLLECTION(LINESTRING EMPTY, POINT(0 0 0))",
            &err_str(
                "mixed dimensionality, parsed layout is XY so expecting 2 coords but got 3 coords at line 1, pos 48",
                "LINE 1: ...(LINESTRING EMPTY, POINT(0 0 0))",
                41,
                None,
            ),
        );
        assert_parse_err(
            "GEOMETRYCOLLECTION(GEOMETRYCOLLECTION(LINESTRING EMPTY), LINESTRING M EMPTY)",
            &err_str(
                "mixed dimensionality, parsed layout is XY but encountered layout of XYM at line 1, pos 57",
                "LINE 1: ...COLLECTION(LINESTRING EMPTY), LINESTRING M EMPTY)",
                41,
                None,
            ),
        );
    }

    const HINT_M: &str =
        "the M variant is required for non-empty XYM geometries in GEOMETRYCOLLECTIONs";
    const NOT_XYM: &str =
        "mixed dimensionality, parsed layout is XYM but encountered layout of not XYM";

    #[test]
    fn collection_xym_base_member_errors() {
        assert_parse_err(
            "GEOMETRYCOLLECTION(POINT M (0 0 0), LINESTRING(0 0, 1 1))",
            &err_str(
                &format!("{NOT_XYM} at line 1, pos 36"),
                "LINE 1: ...RYCOLLECTION(POINT M (0 0 0), LINESTRING(0 0, 1 1))",
                41,
                Some(HINT_M),
            ),
        );
        assert_parse_err(
            "GEOMETRYCOLLECTION M (POINT(0 0 0))",
            &err_str(
                &format!("{NOT_XYM} at line 1, pos 27"),
                "LINE 1: GEOMETRYCOLLECTION M (POINT(0 0 0))",
                35,
                Some(HINT_M),
            ),
        );
        assert_parse_err(
            "GEOMETRYCOLLECTION M (LINESTRING(0 0 0, 1 1 1))",
            &err_str(
                &format!("{NOT_XYM} at line 1, pos 32"),
                "LINE 1: ...OMETRYCOLLECTION M (LINESTRING(0 0 0, 1 1 1))",
                41,
                Some(HINT_M),
            ),
        );
        assert_parse_err(
            "GEOMETRYCOLLECTION M (POLYGON((0 0 0, 1 1 1, 2 3 1, 0 0 0)))",
            &err_str(
                &format!("{NOT_XYM} at line 1, pos 29"),
                "LINE 1: GEOMETRYCOLLECTION M (POLYGON((0 0 0, 1 1 1, 2 3 1, 0 0 0))...",
                37,
                Some(HINT_M),
            ),
        );
        assert_parse_err(
            "GEOMETRYCOLLECTION M (MULTIPOINT((0 0 0), 1 1 1))",
            &err_str(
                &format!("{NOT_XYM} at line 1, pos 32"),
                "LINE 1: ...OMETRYCOLLECTION M (MULTIPOINT((0 0 0), 1 1 1))",
                41,
                Some(HINT_M),
            ),
        );
        assert_parse_err(
            "GEOMETRYCOLLECTION M (MULTILINESTRING((0 0 0, 1 1 1)))",
            &err_str(
                &format!("{NOT_XYM} at line 1, pos 37"),
                "LINE 1: ...YCOLLECTION M (MULTILINESTRING((0 0 0, 1 1 1)))",
                41,
                Some(HINT_M),
            ),
        );
        assert_parse_err(
            "GEOMETRYCOLLECTION M (MULTIPOLYGON(((0 0 0, 1 1 1, 2 3 1, 0 0 0))))",
            &err_str(
                &format!("{NOT_XYM} at line 1, pos 34"),
                "LINE 1: ...ETRYCOLLECTION M (MULTIPOLYGON(((0 0 0, 1 1 1, 2 3 1, 0 0 0)...",
                41,
                Some(HINT_M),
            ),
        );
        assert_parse_err(
            "GEOMETRYCOLLECTIONM(LINESTRING EMPTY, MULTIPOINT(EMPTY, (0 0 0)))",
            &err_str(
                &format!("{NOT_XYM} at line 1, pos 48"),
                "LINE 1: ...M(LINESTRING EMPTY, MULTIPOINT(EMPTY, (0 0 0)))",
                41,
                Some(HINT_M),
            ),
        );
        assert_parse_err(
            "GEOMETRYCOLLECTION(GEOMETRYCOLLECTION M (LINESTRING EMPTY), LINESTRING EMPTY)",
            &err_str(
                &format!("{NOT_XYM} at line 1, pos 60"),
                "LINE 1: ...LECTION M (LINESTRING EMPTY), LINESTRING EMPTY)",
                41,
                Some(HINT_M),
            ),
        );
        assert_parse_err(
            "GEOMETRYCOLLECTION(GEOMETRYCOLLECTION(LINESTRING M EMPTY), LINESTRING EMPTY)",
            &err_str(
                &format!("{NOT_XYM} at line 1, pos 59"),
                "LINE 1: ...LLECTION(LINESTRING M EMPTY), LINESTRING EMPTY)",
                41,
                Some(HINT_M),
            ),
        );
    }

    #[test]
    fn collection_error_spanning_lines() {
        let input = "GEOMETRYCOLLECTION M (\n\
                     \tPOINT EMPTY,\n\
                     \tPOINT M (-2 0 0.5),\n\
                     \tLINESTRING M (0 0 200, 0.1 -1 -20),\n\
                     \tPOLYGON M ((0 0 7, 1 -1 -50, 2 0 0, 0 0 7)),\n\
                     \tMULTIPOINT(-1 5 -16, 0.23 7.0 0),\n\
                     \tMULTILINESTRING M ((0 -1 -2, 2 5 7)),\n\
                     \tMULTIPOLYGON M (((0 0 0, 1 1 1, 2 3 1, 0 0 0)))\n\
                     )";
        assert_parse_err(
            input,
            &err_str(
                &format!("{NOT_XYM} at line 6, pos 11"),
                "LINE 6:  MULTIPOINT(-1 5 -16, 0.23 7.0 0),",
                19,
                Some(HINT_M),
            ),
        );
    }
}
