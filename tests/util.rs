#![allow(unused)]

use ragged_kernels::{Content, DType, NumpyArray, Primitive};

fn scalars(a: &NumpyArray) -> Vec<String> {
    fn fmt<T: Primitive + ToString>(a: &NumpyArray) -> Vec<String> {
        a.as_slice::<T>().unwrap().iter().map(|x| x.to_string()).collect()
    }
    match a.dtype() {
        DType::Bool => fmt::<bool>(a),
        DType::Int8 => fmt::<i8>(a),
        DType::Int16 => fmt::<i16>(a),
        DType::Int32 => fmt::<i32>(a),
        DType::Int64 => fmt::<i64>(a),
        DType::UInt8 => fmt::<u8>(a),
        DType::UInt16 => fmt::<u16>(a),
        DType::UInt32 => fmt::<u32>(a),
        DType::UInt64 => fmt::<u64>(a),
        DType::Float32 => fmt::<f32>(a),
        DType::Float64 => fmt::<f64>(a),
    }
}

fn nest(values: &[String], shape: &[usize]) -> String {
    if shape.len() == 1 {
        return format!("[{}]", values.join(", "));
    }
    let inner: usize = shape[1..].iter().product();
    let parts: Vec<String> = (0..shape[0])
        .map(|i| nest(&values[i * inner..(i + 1) * inner], &shape[1..]))
        .collect();
    format!("[{}]", parts.join(", "))
}

/// Renders entry `i` of `content` in list notation.
pub fn item(content: &Content, i: usize) -> String {
    match content {
        Content::Empty(_) => panic!("EmptyArray has no entries"),
        Content::Numpy(a) => {
            let values = scalars(a);
            if a.ndim() == 1 {
                values[i].clone()
            } else {
                let inner: usize = a.shape()[1..].iter().product();
                nest(&values[i * inner..(i + 1) * inner], &a.shape()[1..])
            }
        }
        Content::Indexed32(x) => item(&x.project().unwrap(), i),
        Content::Indexed64(x) => item(&x.project().unwrap(), i),
        Content::ListOffset(x) => {
            let offsets = x.offsets();
            let (start, stop) = (offsets.get(i) as usize, offsets.get(i + 1) as usize);
            render(&x.content().range(start, stop).unwrap())
        }
        Content::Record(r) => {
            let parts: Vec<String> = r
                .fields()
                .map(|(name, field)| format!("{}: {}", name, item(field, i)))
                .collect();
            format!("{{{}}}", parts.join(", "))
        }
    }
}

/// Renders a whole content in list notation, e.g. `[[1, 0, 2], [], [0, 1]]`.
pub fn render(content: &Content) -> String {
    if let Content::Numpy(a) = content {
        return nest(&scalars(a), a.shape());
    }
    let parts: Vec<String> = (0..content.len()).map(|i| item(content, i)).collect();
    format!("[{}]", parts.join(", "))
}

/// Rows of a one-level list over a flat leaf.
pub fn lists<T: Primitive>(content: &Content) -> Vec<Vec<T>> {
    let Content::ListOffset(x) = content else {
        panic!("expected ListOffsetArray, got {}", content.classname());
    };
    let Content::Numpy(leaf) = x.content() else {
        panic!("expected NumpyArray leaf, got {}", x.content().classname());
    };
    let values = leaf.as_slice::<T>().unwrap();
    x.offsets()
        .to_i64_vec()
        .windows(2)
        .map(|w| values[w[0] as usize..w[1] as usize].to_vec())
        .collect()
}

/// Flat values of a `NumpyArray` content.
pub fn flat<T: Primitive>(content: &Content) -> Vec<T> {
    match content {
        Content::Numpy(a) => a.as_slice::<T>().unwrap().to_vec(),
        other => panic!("expected NumpyArray, got {}", other.classname()),
    }
}
